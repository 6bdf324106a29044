//! Framework registry loaded from the bundled `frameworks.yaml`

use crate::error::ScaffoldError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// File name of the registry inside the templates directory
pub const REGISTRY_FILE: &str = "frameworks.yaml";

/// One selectable framework and the template directory it maps to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameworkDescriptor {
    /// Unique key, also the template directory name
    pub id: String,

    /// Display name of the framework
    pub name: String,

    /// Short description shown next to the name
    pub description: String,

    /// Emoji or short label shown before the name
    pub badge: String,

    /// Optional extra remark (e.g. "Coming soon")
    #[serde(default)]
    pub note: Option<String>,

    /// Disabled frameworks are hidden from the registry
    #[serde(default)]
    pub disabled: bool,

    /// Framework documentation, shown after the project is created
    #[serde(default)]
    pub docs_url: Option<String>,
}

impl FrameworkDescriptor {
    /// Prompt label: badge followed by name
    pub fn label(&self) -> String {
        format!("{} {}", self.badge, self.name)
    }

    /// Prompt hint: description plus the optional note
    pub fn detail(&self) -> String {
        match &self.note {
            Some(note) if !note.is_empty() => format!("{} ({})", self.description, note),
            _ => self.description.clone(),
        }
    }
}

/// Root registry document (templates/frameworks.yaml)
#[derive(Debug, Deserialize)]
struct Registry {
    frameworks: Vec<FrameworkDescriptor>,
}

/// Load the enabled frameworks from `templates_dir/frameworks.yaml`.
pub fn load_frameworks(templates_dir: &Path) -> Result<Vec<FrameworkDescriptor>, ScaffoldError> {
    let path = templates_dir.join(REGISTRY_FILE);
    let config_error = |source: Box<dyn std::error::Error + Send + Sync>| {
        ScaffoldError::FrameworkConfig {
            path: path.clone(),
            source,
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|e| config_error(e.into()))?;
    let registry: Registry = serde_yaml::from_str(&content).map_err(|e| config_error(e.into()))?;

    // Only enabled entries have to be complete
    let frameworks: Vec<FrameworkDescriptor> = registry
        .frameworks
        .into_iter()
        .filter(|f| !f.disabled)
        .collect();

    let mut seen = HashSet::new();
    for framework in &frameworks {
        if let Some(field) = missing_field(framework) {
            return Err(config_error(
                format!("framework '{}' has an empty '{}'", framework.id, field).into(),
            ));
        }
        if !seen.insert(framework.id.as_str()) {
            return Err(config_error(
                format!("duplicate framework id '{}'", framework.id).into(),
            ));
        }
    }

    tracing::debug!(
        count = frameworks.len(),
        path = %path.display(),
        "loaded framework registry"
    );

    Ok(frameworks)
}

/// Look up a framework by its id.
pub fn get_framework_by_id<'a>(
    frameworks: &'a [FrameworkDescriptor],
    id: &str,
) -> Option<&'a FrameworkDescriptor> {
    frameworks.iter().find(|f| f.id == id)
}

fn missing_field(framework: &FrameworkDescriptor) -> Option<&'static str> {
    [
        ("id", &framework.id),
        ("name", &framework.name),
        ("description", &framework.description),
        ("badge", &framework.badge),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_registry(yaml: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(REGISTRY_FILE), yaml).unwrap();
        dir
    }

    const SAMPLE: &str = r#"
frameworks:
  - id: react
    name: React
    description: React starter
    badge: "⚛️"
  - id: vue
    name: Vue
    description: Vue starter
    badge: "🟢"
    note: Coming soon
    disabled: true
  - id: html
    name: HTML
    description: Plain HTML
    badge: "📄"
    note: No build step
"#;

    #[test]
    fn test_disabled_frameworks_are_filtered() {
        let dir = write_registry(SAMPLE);
        let frameworks = load_frameworks(dir.path()).unwrap();

        let ids: Vec<&str> = frameworks.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["react", "html"]);
        for f in &frameworks {
            assert!(!f.id.is_empty());
            assert!(!f.name.is_empty());
            assert!(!f.description.is_empty());
            assert!(!f.badge.is_empty());
        }
    }

    #[test]
    fn test_get_framework_by_id() {
        let dir = write_registry(SAMPLE);
        let frameworks = load_frameworks(dir.path()).unwrap();

        assert_eq!(get_framework_by_id(&frameworks, "react").unwrap().name, "React");
        assert!(get_framework_by_id(&frameworks, "svelte").is_none());
        // Disabled frameworks cannot be looked up either
        assert!(get_framework_by_id(&frameworks, "vue").is_none());
    }

    #[test]
    fn test_label_and_detail() {
        let dir = write_registry(SAMPLE);
        let frameworks = load_frameworks(dir.path()).unwrap();
        let html = get_framework_by_id(&frameworks, "html").unwrap();

        assert_eq!(html.label(), "📄 HTML");
        assert_eq!(html.detail(), "Plain HTML (No build step)");
        assert_eq!(frameworks[0].detail(), "React starter");
    }

    #[test]
    fn test_missing_registry_fails() {
        let dir = TempDir::new().unwrap();
        let err = load_frameworks(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::FrameworkConfig { .. }));
        assert!(err.to_string().contains(REGISTRY_FILE));
    }

    #[test]
    fn test_malformed_registry_fails() {
        let dir = write_registry("frameworks: not-a-list");
        assert!(matches!(
            load_frameworks(dir.path()),
            Err(ScaffoldError::FrameworkConfig { .. })
        ));
    }

    #[test]
    fn test_empty_badge_is_rejected() {
        let dir = write_registry(
            "frameworks:\n  - id: react\n    name: React\n    description: x\n    badge: \"\"\n",
        );
        let err = load_frameworks(dir.path()).unwrap_err();
        assert!(err.to_string().contains("badge"));
    }

    #[test]
    fn test_incomplete_disabled_entry_is_ignored() {
        let dir = write_registry(
            "frameworks:\n  - {id: react, name: React, description: x, badge: b}\n  - {id: vue, name: Vue, description: \"\", badge: v, disabled: true}\n",
        );
        let frameworks = load_frameworks(dir.path()).unwrap();
        let ids: Vec<&str> = frameworks.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["react"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let dir = write_registry(
            "frameworks:\n  - {id: a, name: A, description: x, badge: b}\n  - {id: a, name: B, description: y, badge: c}\n",
        );
        let err = load_frameworks(dir.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_bundled_registry_loads() {
        let templates = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        let frameworks = load_frameworks(&templates).unwrap();
        assert!(get_framework_by_id(&frameworks, "react").is_some());
        for f in &frameworks {
            assert!(templates.join(&f.id).is_dir(), "missing template for {}", f.id);
        }
    }
}
