//! Template directory copying

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Copy the bundled template `template_id` into `target_dir`.
///
/// Fails with [`ScaffoldError::TemplateNotFound`] before touching the target when
/// the template directory is missing. Existing files in the target are
/// overwritten. A failure partway through leaves the files copied so far in place.
///
/// Returns the copied files as paths relative to the template root.
pub async fn copy_template(
    templates_dir: &Path,
    template_id: &str,
    target_dir: &Path,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let template_root = templates_dir.join(template_id);
    if !template_root.is_dir() {
        return Err(ScaffoldError::TemplateNotFound {
            id: template_id.to_string(),
            path: template_root,
        });
    }

    // Ensure target directory exists
    fs::create_dir_all(target_dir)
        .await
        .map_err(|source| copy_error(target_dir, source))?;

    let mut copied_files = Vec::new();

    for entry in WalkDir::new(&template_root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template_root.as_path()).to_path_buf();
            ScaffoldError::Copy {
                path,
                source: e.into(),
            }
        })?;

        let relative = entry
            .path()
            .strip_prefix(&template_root)
            .unwrap_or(entry.path())
            .to_path_buf();
        let target_path = target_dir.join(&relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .map_err(|source| copy_error(&target_path, source))?;
            continue;
        }

        // Ensure parent directories exist
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| copy_error(parent, source))?;
        }

        fs::copy(entry.path(), &target_path)
            .await
            .map_err(|source| copy_error(&target_path, source))?;

        copied_files.push(relative);
    }

    tracing::debug!(
        template = template_id,
        files = copied_files.len(),
        target = %target_dir.display(),
        "copied template"
    );

    Ok(copied_files)
}

fn copy_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Copy {
        path: path.to_path_buf(),
        source,
    }
}
