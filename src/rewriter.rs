//! Placeholder substitution for template path names.
//! Only names are rewritten; file contents are never touched.

use std::path::{Component, Path, PathBuf};

use crate::constants::{PLACEHOLDER_TOKEN, TEMPLATE_SUFFIX};

/// Rewrites template path segments, replacing the placeholder token with the
/// application name and dropping the template suffix from file names.
#[derive(Debug, Clone)]
pub struct TokenRewriter {
    token: String,
    suffix: String,
}

impl TokenRewriter {
    pub fn new<S: Into<String>>(token: S, suffix: S) -> Self {
        Self { token: token.into(), suffix: suffix.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Rewrites a single file name.
    ///
    /// Every occurrence of the token is replaced. The template suffix is
    /// stripped only when the token was present; `foo.tmpl` stays `foo.tmpl`.
    pub fn rewrite(&self, segment: &str, app_name: &str) -> String {
        if !segment.contains(&self.token) {
            return segment.to_string();
        }
        self.strip_suffix(segment).replace(&self.token, app_name)
    }

    /// Rewrites a single directory name. Directories never lose a suffix.
    pub fn rewrite_dir(&self, segment: &str, app_name: &str) -> String {
        if segment.contains(&self.token) {
            segment.replace(&self.token, app_name)
        } else {
            segment.to_string()
        }
    }

    /// Rewrites a path relative to the template root.
    ///
    /// The token gate is evaluated on the whole relative path, so a file that
    /// sits below a `$appname` directory loses its template suffix even when
    /// its own name does not carry the token. Names that are not valid
    /// UTF-8 cannot hold the token and are kept byte for byte.
    ///
    /// # Arguments
    /// * `relative` - Path relative to the template root
    /// * `app_name` - Substitution value for the token
    /// * `is_dir` - Whether the last segment names a directory
    pub fn rewrite_path(&self, relative: &Path, app_name: &str, is_dir: bool) -> PathBuf {
        let gated = relative.to_string_lossy().contains(&self.token);
        if !gated {
            return relative.to_path_buf();
        }

        let segments: Vec<Component> = relative.components().collect();
        let last = segments.len().saturating_sub(1);
        let mut rewritten = PathBuf::new();
        for (index, component) in segments.into_iter().enumerate() {
            let Component::Normal(name) = component else {
                rewritten.push(component.as_os_str());
                continue;
            };
            let Some(name) = name.to_str() else {
                rewritten.push(name);
                continue;
            };
            let name = if index == last && !is_dir { self.strip_suffix(name) } else { name };
            rewritten.push(name.replace(&self.token, app_name));
        }
        rewritten
    }

    /// Drops the template suffix from the name as written in the template.
    fn strip_suffix<'a>(&self, name: &'a str) -> &'a str {
        match name.strip_suffix(self.suffix.as_str()) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => name,
        }
    }
}

impl Default for TokenRewriter {
    fn default() -> Self {
        TokenRewriter::new(PLACEHOLDER_TOKEN, TEMPLATE_SUFFIX)
    }
}
