//! Scaffolding pipeline.
//! Copies a template into the staging area, packs the rewritten project,
//! unpacks it at its destination and removes the staging area again.

use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    archive,
    catalog::{TemplateCatalog, TemplateKind},
    config::ScaffoldConfig,
    copier::TreeCopier,
    error::{Error, Result},
    policy::FailurePolicy,
    rewriter::TokenRewriter,
    staging::StagingArea,
};

/// Steps a run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    StagingCreated,
    Copied,
    Packed,
    Unpacked,
    CleanedUp,
    Failed,
}

/// What a run actually produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The project was created at the destination.
    Created,
    /// The template had no top-level `$appname` entry, so nothing was packed.
    NothingToPackage,
    /// No archive was found after packing, so nothing was unpacked.
    NoArchive,
    /// The destination already existed and was left untouched (lenient policy only).
    DestinationExists,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub destination: PathBuf,
    pub outcome: ScaffoldOutcome,
    /// Last state reached before cleanup
    pub state: PipelineState,
    /// Set when the staging area could not be removed
    pub cleanup_error: Option<String>,
}

impl ScaffoldReport {
    pub fn is_created(&self) -> bool {
        self.outcome == ScaffoldOutcome::Created
    }
}

pub struct ScaffoldPipeline {
    config: ScaffoldConfig,
    catalog: Box<dyn TemplateCatalog>,
    policy: FailurePolicy,
    rewriter: TokenRewriter,
}

impl ScaffoldPipeline {
    pub fn new(
        config: ScaffoldConfig,
        catalog: Box<dyn TemplateCatalog>,
        policy: FailurePolicy,
    ) -> Self {
        Self { config, catalog, policy, rewriter: TokenRewriter::default() }
    }

    pub fn with_rewriter(mut self, rewriter: TokenRewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Runs the whole pipeline for `kind` and `app_name`.
    ///
    /// The staging area is removed whether the steps succeed or not; a
    /// failure to remove it is recorded in the report and never turns a
    /// successful run into an error.
    ///
    /// # Errors
    /// * `Error::SourceMissing` if the template tree is missing (strict policy)
    /// * `Error::ArchiveCreation` if packing fails
    /// * `Error::DestinationExists` if the destination exists (strict policy)
    /// * `Error::IoError` for any other filesystem failure
    pub fn run(&self, kind: TemplateKind, app_name: &str) -> Result<ScaffoldReport> {
        let mut state = PipelineState::Idle;
        let template_root = self.catalog.resolve(kind);
        let destination = self.config.destination_root.join(app_name);

        let staging = StagingArea::acquire(&self.config.staging_root)?;
        transition(&mut state, PipelineState::StagingCreated);

        let result =
            self.run_staged(&staging, &template_root, &destination, kind, app_name, &mut state);
        if result.is_err() {
            transition(&mut state, PipelineState::Failed);
        }

        let cleanup_error = match staging.release() {
            Ok(()) => None,
            Err(e) => {
                debug!("{e}");
                Some(e.to_string())
            }
        };

        let outcome = result?;
        let last_state = state;
        transition(&mut state, PipelineState::CleanedUp);

        Ok(ScaffoldReport { destination, outcome, state: last_state, cleanup_error })
    }

    fn run_staged(
        &self,
        staging: &StagingArea,
        template_root: &Path,
        destination: &Path,
        kind: TemplateKind,
        app_name: &str,
        state: &mut PipelineState,
    ) -> Result<ScaffoldOutcome> {
        let staged_template = staging.path().join(kind.dir_name());
        let copier = TreeCopier::new(self.rewriter.clone(), self.policy);
        let report = copier.copy_tree(template_root, &staged_template, app_name, true)?;
        debug!("Staged {} files and {} directories", report.files, report.directories);
        transition(state, PipelineState::Copied);

        let staged_project = staged_template.join(app_name);
        let archive_path = staging.path().join(kind.archive_name());
        if staged_project.is_dir() {
            archive::pack(&staged_project, &archive_path)?;
            transition(state, PipelineState::Packed);
        } else {
            debug!(
                "Template '{}' has no '{}' entry, nothing to package",
                template_root.display(),
                self.rewriter.token()
            );
            return Ok(ScaffoldOutcome::NothingToPackage);
        }

        if !archive_path.is_file() {
            debug!("Archive '{}' is missing, nothing to unpack", archive_path.display());
            return Ok(ScaffoldOutcome::NoArchive);
        }

        match archive::unpack(&archive_path, destination) {
            Ok(()) => {
                transition(state, PipelineState::Unpacked);
                Ok(ScaffoldOutcome::Created)
            }
            Err(err @ Error::DestinationExists { .. }) if !self.policy.is_strict() => {
                debug!("{err}");
                Ok(ScaffoldOutcome::DestinationExists)
            }
            Err(err) => Err(err),
        }
    }
}

fn transition(state: &mut PipelineState, next: PipelineState) {
    debug!("Pipeline state: {:?} -> {:?}", state, next);
    *state = next;
}
