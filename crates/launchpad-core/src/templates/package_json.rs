//! `package.json` patching after a template has been copied

use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Shallow-merge `overrides` into `<project_dir>/package.json`.
///
/// Overrides win, every other key is kept, and key order is preserved. The file
/// is written back with two-space indentation and a trailing newline.
pub async fn update_package_json(
    project_dir: &Path,
    overrides: Map<String, Value>,
) -> Result<(), ScaffoldError> {
    let path = project_dir.join("package.json");

    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScaffoldError::PackageJsonMissing(path));
        }
        Err(source) => return Err(ScaffoldError::Io { path, source }),
    };

    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| ScaffoldError::PackageJson {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    let Some(object) = manifest.as_object_mut() else {
        return Err(ScaffoldError::PackageJson {
            path,
            reason: "top-level value is not an object".to_string(),
        });
    };
    object.extend(overrides);

    let mut output = serde_json::to_string_pretty(&manifest).map_err(|e| {
        ScaffoldError::PackageJson {
            path: path.clone(),
            reason: e.to_string(),
        }
    })?;
    output.push('\n');

    fs::write(&path, output)
        .await
        .map_err(|source| ScaffoldError::Io {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), "updated package.json");
    Ok(())
}

/// Overrides that rename the project
pub fn name_override(name: &str) -> Map<String, Value> {
    let mut overrides = Map::new();
    overrides.insert("name".to_string(), Value::String(name.to_string()));
    overrides
}
