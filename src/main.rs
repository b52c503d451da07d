//! Tron's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration resolution and
//! reports the real outcome of the scaffolding run.

use tron::{
    catalog::DirectoryCatalog,
    cli::{get_args, Args, Command},
    config::{load_config, ConfigFile, ScaffoldConfig},
    error::{default_error_handler, Result},
    logger::init_logger,
    pipeline::{ScaffoldOutcome, ScaffoldPipeline},
    policy::FailurePolicy,
};

/// Exit code used when the run finished without creating a project.
const INCOMPLETE_EXIT_CODE: i32 = 8;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(INCOMPLETE_EXIT_CODE),
        Err(err) => default_error_handler(err),
    }
}

/// Builds the configuration: CLI flags, then the config file, then defaults.
fn resolve_config(args: &Args) -> Result<ScaffoldConfig> {
    let mut overrides = match &args.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };
    if let Some(templates_dir) = &args.templates_dir {
        overrides.template_root = Some(templates_dir.clone());
    }
    if let Some(staging_dir) = &args.staging_dir {
        overrides.staging_root = Some(staging_dir.clone());
    }
    if let Some(output_root) = &args.output_root {
        overrides.destination_root = Some(output_root.clone());
    }
    ScaffoldConfig::resolve(overrides)
}

/// Main application logic execution.
///
/// # Returns
/// * `Result<bool>` - Whether a project was created
fn run(args: Args) -> Result<bool> {
    let config = resolve_config(&args)?;
    let policy = FailurePolicy::from_lenient_flag(args.lenient);
    let catalog = Box::new(DirectoryCatalog::new(&config.template_root));

    let Command::New { template } = &args.command;
    let app_name = template.app_name();
    let pipeline = ScaffoldPipeline::new(config, catalog, policy);
    let report = pipeline.run(template.kind(), app_name)?;

    if let Some(cleanup_error) = &report.cleanup_error {
        eprintln!("Warning: {cleanup_error}");
    }

    match report.outcome {
        ScaffoldOutcome::Created => {
            println!(
                "New folder {app_name} is created. You can find it there: {}",
                report.destination.display()
            );
            println!("Your new project {app_name} is ready to code!");
        }
        ScaffoldOutcome::NothingToPackage => {
            eprintln!("The {} template produced no project, nothing was created.", template.kind());
        }
        ScaffoldOutcome::NoArchive => {
            eprintln!("No archive was produced for {app_name}, nothing was created.");
        }
        ScaffoldOutcome::DestinationExists => {
            eprintln!(
                "Directory {} already exists and was left untouched.",
                report.destination.display()
            );
        }
    }

    Ok(report.is_created())
}
