//! Error types and user-facing error explanations

use crate::validate::NameError;
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Unknown framework '{id}'. Available frameworks: {available}")]
    UnknownFramework { id: String, available: String },

    #[error(transparent)]
    InvalidProjectName(#[from] NameError),

    #[error("Cannot derive a project name from {0}")]
    ProjectNameUnavailable(PathBuf),

    #[error("Failed to load framework configuration from {path}: {source}")]
    FrameworkConfig {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error(
        "Template '{id}' not found at {path}. This is a packaging bug in the tool, not something you did."
    )]
    TemplateNotFound { id: String, path: PathBuf },

    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("package.json not found in template (expected {0})")]
    PackageJsonMissing(PathBuf),

    #[error("Invalid package.json at {path}: {reason}")]
    PackageJson { path: PathBuf, reason: String },

    #[error("Dependency installation failed: {0}")]
    Install(String),
}

/// Broad categories used to pick a user-actionable explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    PermissionDenied,
    DiskFull,
    AlreadyExists,
    TemplateMissing,
    Unknown,
}

impl ErrorClass {
    /// Classify an error by walking its source chain.
    ///
    /// IO error kinds are checked first, then the errno names that show up in
    /// messages coming from other tools (`EACCES`, `ENOSPC`, `EEXIST`).
    pub fn classify(err: &(dyn StdError + 'static)) -> Self {
        let mut current: Option<&(dyn StdError + 'static)> = Some(err);
        while let Some(e) = current {
            if let Some(ScaffoldError::TemplateNotFound { .. }) = e.downcast_ref::<ScaffoldError>() {
                return ErrorClass::TemplateMissing;
            }
            if let Some(io_err) = e.downcast_ref::<io::Error>() {
                match io_err.kind() {
                    io::ErrorKind::PermissionDenied => return ErrorClass::PermissionDenied,
                    io::ErrorKind::StorageFull => return ErrorClass::DiskFull,
                    io::ErrorKind::AlreadyExists => return ErrorClass::AlreadyExists,
                    _ => {}
                }
            }

            let message = e.to_string();
            if message.contains("EACCES") || message.contains("EPERM") {
                return ErrorClass::PermissionDenied;
            }
            if message.contains("ENOSPC") {
                return ErrorClass::DiskFull;
            }
            if message.contains("EEXIST") {
                return ErrorClass::AlreadyExists;
            }

            current = e.source();
        }
        ErrorClass::Unknown
    }
}

/// Turn an error into an explanation the user can act on.
pub fn detailed_error_message(
    err: &(dyn StdError + 'static),
    issues_url: &str,
    verbose: bool,
) -> String {
    let mut message = match ErrorClass::classify(err) {
        ErrorClass::PermissionDenied => "Permission denied while writing the project.\n\
             Check that you have write access to the destination, or pick another location."
            .to_string(),
        ErrorClass::DiskFull => "Not enough disk space to create the project.\n\
             Free up some disk space and try again."
            .to_string(),
        ErrorClass::AlreadyExists => "A file or directory already exists at the destination.\n\
             Choose a different project name or remove the existing entry."
            .to_string(),
        ErrorClass::TemplateMissing => format!(
            "{}\nPlease report this issue at {}",
            err, issues_url
        ),
        ErrorClass::Unknown => format!(
            "Unexpected error: {}\nIf this keeps happening, please report it at {}",
            err, issues_url
        ),
    };

    if verbose {
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUES: &str = "https://example.invalid/issues";

    fn io_message(msg: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, msg.to_string())
    }

    #[test]
    fn test_eacces_message_mentions_permission() {
        let err = io_message("EACCES: permission denied, mkdir '/root/app'");
        let msg = detailed_error_message(&err, ISSUES, false);
        assert!(msg.contains("Permission denied"));
    }

    #[test]
    fn test_enospc_message_mentions_disk_space() {
        let err = io_message("ENOSPC: no space left on device");
        let msg = detailed_error_message(&err, ISSUES, false);
        assert!(msg.contains("disk space"));
    }

    #[test]
    fn test_eexist_message_mentions_already_exists() {
        let err = io_message("EEXIST: file already exists, mkdir 'app'");
        let msg = detailed_error_message(&err, ISSUES, false);
        assert!(msg.contains("already exists"));
    }

    #[test]
    fn test_unknown_message_keeps_original_and_points_to_issues() {
        let err = io_message("something odd happened");
        let msg = detailed_error_message(&err, ISSUES, false);
        assert!(msg.contains("something odd happened"));
        assert!(msg.contains(ISSUES));
    }

    #[test]
    fn test_classify_uses_io_kind_through_source_chain() {
        let err = ScaffoldError::Copy {
            path: PathBuf::from("dest/index.html"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(ErrorClass::classify(&err), ErrorClass::PermissionDenied);
    }

    #[test]
    fn test_template_not_found_is_a_packaging_bug() {
        let err = ScaffoldError::TemplateNotFound {
            id: "react".to_string(),
            path: PathBuf::from("/opt/launchpad/templates/react"),
        };
        assert_eq!(ErrorClass::classify(&err), ErrorClass::TemplateMissing);
        let msg = detailed_error_message(&err, ISSUES, false);
        assert!(msg.contains("/opt/launchpad/templates/react"));
        assert!(msg.contains(ISSUES));
    }

    #[test]
    fn test_verbose_appends_causes() {
        let err = ScaffoldError::Copy {
            path: PathBuf::from("dest/a.txt"),
            source: io_message("disk went away"),
        };
        let msg = detailed_error_message(&err, ISSUES, true);
        assert!(msg.contains("caused by: disk went away"));
    }
}
