//! Project name validation
//!
//! Used both for names passed on the command line and as the live validator of
//! the interactive name prompt, so it must stay cheap and side-effect free.

use std::path::Path;
use thiserror::Error;

/// Why a project name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Project name is required")]
    Required,

    #[error(
        "Project name can only contain letters, numbers, dashes and underscores (no spaces or special characters)"
    )]
    InvalidCharacters,

    #[error("A file or directory named \"{0}\" already exists")]
    AlreadyExists(String),
}

/// Validate a project name against the current working directory.
pub fn validate_project_name(name: Option<&str>, allow_existing: bool) -> Result<(), NameError> {
    validate_project_name_in(Path::new("."), name, allow_existing)
}

/// Validate a project name that would be created inside `base`.
///
/// Rules are applied in order: presence, character set, then (unless
/// `allow_existing`) whether anything already exists at `base/name`. An empty
/// directory still counts as existing.
pub fn validate_project_name_in(
    base: &Path,
    name: Option<&str>,
    allow_existing: bool,
) -> Result<(), NameError> {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return Err(NameError::Required),
    };

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(NameError::InvalidCharacters);
    }

    if !allow_existing && base.join(name).symlink_metadata().is_ok() {
        return Err(NameError::AlreadyExists(name.to_string()));
    }

    Ok(())
}
