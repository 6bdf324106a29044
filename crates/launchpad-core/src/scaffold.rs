//! The scaffolding workflow: prompts first, then side effects, strictly in order
//!
//! Every step is either satisfied by a pre-supplied option or resolved through
//! the [`Ui`]. A cancelled prompt ends the run with [`Outcome::Cancelled`].

use crate::error::{detailed_error_message, ScaffoldError};
use crate::frameworks::{get_framework_by_id, load_frameworks, FrameworkDescriptor};
use crate::product::ProductConfig;
use crate::runtime::install::run_install;
use crate::runtime::{install_with, PackageManager};
use crate::templates::package_json::name_override;
use crate::templates::{copy_template, resolve_templates_dir, update_package_json};
use crate::ui::{Choice, Ui, Validator};
use crate::validate::validate_project_name_in;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Options collected from the command line; unset fields are prompted for
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Framework id, must match an enabled framework
    pub framework: Option<String>,

    /// Name of the new project directory
    pub project_name: Option<String>,

    /// Scaffold into the current working directory
    pub current_folder: bool,

    /// Pre-answered install question
    pub install: Option<bool>,

    /// Show underlying error details
    pub verbose: bool,

    /// Print the plan without touching the filesystem
    pub dry_run: bool,

    /// List the available frameworks and stop
    pub show_info: bool,
}

/// Process context the workflow runs against
#[derive(Debug, Clone)]
pub struct ScaffoldEnv {
    /// Directory the user invoked the tool from
    pub cwd: PathBuf,

    /// Bundled templates root
    pub templates_dir: PathBuf,

    /// Executable run instead of the detected package manager
    pub install_program: Option<String>,
}

impl ScaffoldEnv {
    /// Build the environment from the running process
    pub fn from_process<C: ProductConfig>(config: &C) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(Self {
            cwd,
            templates_dir: resolve_templates_dir(config),
            install_program: None,
        })
    }
}

/// How a run ended (errors are returned separately)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { destination: PathBuf, installed: bool },
    DryRun { destination: PathBuf },
    Cancelled,
    InfoShown,
}

/// Run the scaffolding workflow
pub async fn run<C: ProductConfig, U: Ui>(
    config: &C,
    ui: &mut U,
    env: &ScaffoldEnv,
    options: ScaffoldOptions,
) -> Result<Outcome> {
    ui.intro(&format!("{} v{}", config.display_name(), config.version()))?;
    tracing::debug!(?options, templates = %env.templates_dir.display(), "starting scaffold");

    // Step 1: Load the framework registry
    let frameworks = load_frameworks(&env.templates_dir)?;
    if frameworks.is_empty() {
        anyhow::bail!("No frameworks available.");
    }

    if options.show_info {
        show_frameworks(config, ui, &frameworks)?;
        return Ok(Outcome::InfoShown);
    }

    // Step 2: Select and resolve the framework
    let Some(framework) = select_framework(ui, &frameworks, options.framework.as_deref())? else {
        return cancelled(ui);
    };

    // Step 3: Choose where to install
    let current_folder = if options.current_folder {
        true
    } else if options.project_name.is_some() {
        false
    } else {
        match select_location(ui, &env.cwd)? {
            Some(current_folder) => current_folder,
            None => return cancelled(ui),
        }
    };

    // Step 4: Resolve the project name
    let project_name = if current_folder {
        folder_name(&env.cwd)
            .map(str::to_string)
            .ok_or_else(|| ScaffoldError::ProjectNameUnavailable(env.cwd.clone()))?
    } else if let Some(name) = &options.project_name {
        validate_project_name_in(&env.cwd, Some(name.as_str()), false).map_err(ScaffoldError::from)?;
        name.clone()
    } else {
        match prompt_project_name(ui, &env.cwd)? {
            Some(name) => name,
            None => return cancelled(ui),
        }
    };

    let (destination, dir_label) = if current_folder {
        (env.cwd.clone(), None)
    } else {
        (env.cwd.join(&project_name), Some(project_name.clone()))
    };

    // Step 5: Dry run stops before any side effect
    if options.dry_run {
        let plan = format!(
            "Framework:   {}\nName:        {}\nDestination: {}\nTemplate:    {}",
            framework.label(),
            project_name,
            destination.display(),
            env.templates_dir.join(&framework.id).display()
        );
        ui.note("Dry run - nothing was written", &plan)?;
        ui.outro("Dry run complete")?;
        return Ok(Outcome::DryRun { destination });
    }

    // Step 6: Copy the template and patch package.json
    create_project(config, ui, env, framework, &project_name, &destination, options.verbose)
        .await?;

    // Step 7: Decide whether to install
    let install = match options.install {
        Some(install) => install,
        None => match ui.confirm("Install dependencies now?", true)? {
            Some(install) => install,
            None => return cancelled(ui),
        },
    };

    // Step 8: Install dependencies
    let package_manager = PackageManager::detect(&destination);
    let installed = if install {
        install_project(
            ui,
            env,
            package_manager,
            &destination,
            dir_label.as_deref(),
        )
        .await?
    } else {
        false
    };

    // Step 9: Show next steps
    print_next_steps(
        config,
        ui,
        framework,
        dir_label.as_deref(),
        package_manager,
        installed,
    )?;

    Ok(Outcome::Created {
        destination,
        installed,
    })
}

fn cancelled<U: Ui>(ui: &mut U) -> Result<Outcome> {
    ui.cancel("Operation cancelled")?;
    Ok(Outcome::Cancelled)
}

fn folder_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

fn show_frameworks<C: ProductConfig, U: Ui>(
    config: &C,
    ui: &mut U,
    frameworks: &[FrameworkDescriptor],
) -> Result<()> {
    let body = frameworks
        .iter()
        .map(|f| {
            let mut line = format!("{:<10} {} - {}", f.id, f.label(), f.detail());
            if let Some(url) = &f.docs_url {
                line.push_str(&format!("\n           {}", url));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");

    ui.note("Available frameworks", &body)?;
    ui.outro(&format!(
        "Run `{} --framework <id> <project-name>` to get started",
        config.name()
    ))?;
    Ok(())
}

fn select_framework<'a, U: Ui>(
    ui: &mut U,
    frameworks: &'a [FrameworkDescriptor],
    specified: Option<&str>,
) -> Result<Option<&'a FrameworkDescriptor>> {
    // If a framework was specified via --framework, use it directly
    if let Some(id) = specified {
        let Some(framework) = get_framework_by_id(frameworks, id) else {
            let available = frameworks
                .iter()
                .map(|f| f.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ScaffoldError::UnknownFramework {
                id: id.to_string(),
                available,
            }
            .into());
        };
        ui.info(&format!("Framework: {}", framework.label()))?;
        return Ok(Some(framework));
    }

    let choices: Vec<Choice> = frameworks
        .iter()
        .map(|f| Choice::new(f.label(), f.detail()))
        .collect();

    let Some(idx) = ui.select("Which framework would you like to use?", &choices)? else {
        return Ok(None);
    };

    frameworks
        .get(idx)
        .map(Some)
        .context("Framework selection out of range")
}

/// Returns `Some(true)` for the current folder, `Some(false)` for a new one
fn select_location<U: Ui>(ui: &mut U, cwd: &Path) -> Result<Option<bool>> {
    let here = folder_name(cwd).unwrap_or(".");
    let choices = [
        Choice::new(
            format!("Current directory ({})", here),
            "Scaffold into the folder you are in",
        ),
        Choice::new("New directory", "Create a new folder for the project"),
    ];

    let selected = ui.select("Where should the project be created?", &choices)?;
    Ok(selected.map(|idx| idx == 0))
}

fn prompt_project_name<U: Ui>(ui: &mut U, cwd: &Path) -> Result<Option<String>> {
    let base = cwd.to_path_buf();
    let validator: Validator = Box::new(move |value: &str| {
        validate_project_name_in(&base, Some(value), false).map_err(|e| e.to_string())
    });

    Ok(ui.input("What is your project name?", "my-app", validator)?)
}

async fn create_project<C: ProductConfig, U: Ui>(
    config: &C,
    ui: &mut U,
    env: &ScaffoldEnv,
    framework: &FrameworkDescriptor,
    project_name: &str,
    destination: &Path,
    verbose: bool,
) -> Result<()> {
    ui.info(&format!("Creating project in {}", destination.display()))?;

    let copied_files = match copy_template(&env.templates_dir, &framework.id, destination).await {
        Ok(files) => files,
        Err(e) => {
            ui.error(&detailed_error_message(&e, config.issues_url(), verbose))?;
            anyhow::bail!(
                "Failed to create the project from the {} template.",
                framework.name
            );
        }
    };

    ui.success(&format!(
        "Created {} files in {}",
        copied_files.len(),
        destination.display()
    ))?;

    // Best effort: the project is usable even with the template's name
    if let Err(e) = update_package_json(destination, name_override(project_name)).await {
        tracing::debug!(error = %e, "package.json update failed");
        let message = if verbose {
            format!("Could not update package.json: {}", e)
        } else {
            "Could not update package.json, set the project name by hand".to_string()
        };
        ui.warning(&message)?;
    }

    Ok(())
}

/// Returns whether the install succeeded; failures are reported, not raised
async fn install_project<U: Ui>(
    ui: &mut U,
    env: &ScaffoldEnv,
    package_manager: PackageManager,
    destination: &Path,
    dir_label: Option<&str>,
) -> Result<bool> {
    ui.info(&format!(
        "Installing dependencies with {}...",
        package_manager
    ))?;

    let result = match &env.install_program {
        Some(program) => run_install(program, destination).await,
        None => install_with(package_manager, destination).await,
    };

    match result {
        Ok(()) => {
            ui.success("Dependencies installed")?;
            Ok(true)
        }
        Err(e) => {
            ui.error(&e.to_string())?;
            ui.info(&format!(
                "You can install them manually with: {}",
                package_manager.manual_install_hint(dir_label)
            ))?;
            Ok(false)
        }
    }
}

fn print_next_steps<C: ProductConfig, U: Ui>(
    config: &C,
    ui: &mut U,
    framework: &FrameworkDescriptor,
    dir_label: Option<&str>,
    package_manager: PackageManager,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(dir_label, framework, package_manager, installed);
    let body = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");
    ui.note("Next steps", &body)?;

    let mut docs = vec![format!(
        "{} docs: {}",
        config.display_name(),
        config.docs_url()
    )];
    if let Some(url) = &framework.docs_url {
        docs.push(format!("{} docs: {}", framework.name, url));
    }
    ui.info(&docs.join("\n"))?;

    ui.outro("Happy coding!")?;
    Ok(())
}
