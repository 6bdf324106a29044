//! Locating the templates directory that ships with the tool
//!
//! Templates are resolved relative to the tool's own installation, never the
//! user's working directory:
//! - An environment variable override (see [`ProductConfig::templates_dir_env`])
//! - `templates/` next to the executable
//! - `../share/<name>/templates` relative to the executable (package installs)
//! - The build-time fallback from [`ProductConfig::bundled_templates_dir`]

use crate::product::ProductConfig;
use std::path::PathBuf;

/// Resolve the templates directory for a product.
///
/// When no candidate exists the bundled fallback is returned as is, so the
/// registry and copier can report the exact path they expected.
pub fn resolve_templates_dir<C: ProductConfig>(config: &C) -> PathBuf {
    if let Ok(dir) = std::env::var(config.templates_dir_env()) {
        if !dir.is_empty() {
            tracing::debug!(%dir, "using templates directory from environment");
            return PathBuf::from(dir);
        }
    }

    let bundled = config.bundled_templates_dir();
    let found = candidates(config.name())
        .into_iter()
        .find(|candidate| candidate.is_dir());

    match found {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using templates next to executable");
            dir
        }
        None => {
            tracing::debug!(dir = %bundled.display(), "using bundled templates directory");
            bundled
        }
    }
}

fn candidates(product_name: &str) -> Vec<PathBuf> {
    let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
    else {
        return Vec::new();
    };

    vec![
        exe_dir.join("templates"),
        exe_dir
            .join("..")
            .join("share")
            .join(product_name)
            .join("templates"),
    ]
}
