//! Feature module generation command

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

use crate::scaffold::Scaffolder;

static SUCCESS: Emoji = Emoji("✓", "√");

/// Default directory feature modules are created under, relative to the
/// invoking project.
pub const DEFAULT_MODULES_ROOT: &str = "src/modules";

/// Generate a complete CRUD feature module
pub struct GenerateCommand {
    name: Option<String>,
    modules_root: PathBuf,
}

impl GenerateCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Feature name from the command line, if one was given
    /// * `modules_root` - Directory feature modules are created under
    #[must_use]
    pub const fn new(name: Option<String>, modules_root: PathBuf) -> Self {
        Self { name, modules_root }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No feature name was supplied
    /// - The target module directory already exists
    /// - Rendering or writing the module files fails
    pub fn execute(&self) -> Result<()> {
        let scaffolder = Scaffolder::new(
            self.name.as_deref().unwrap_or_default(),
            &self.modules_root,
        )?;

        println!(
            "{} {} ({})...",
            style("Initializing module:").cyan().bold(),
            style(scaffolder.feature_name()).green().bold(),
            style(scaffolder.class_name()).green()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Scaffolding module files...");

        let files = scaffolder.scaffold()?;

        spinner.finish_and_clear();

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );
        for file in &files {
            println!(
                "  {} {} ({})",
                style(SUCCESS).green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        println!();
        println!(
            "{} Module created at: {}",
            style("SUCCEEDED!").green().bold(),
            style(scaffolder.module_dir().display()).cyan()
        );
        println!(
            "Don't forget to import {} into {}!",
            style(format!("{}Module", scaffolder.class_name())).yellow(),
            style("AppModule").yellow()
        );

        let feature_name = scaffolder.feature_name();
        let class_name = scaffolder.class_name();
        println!(
            "  {}",
            style(format!(
                "import {{ {class_name}Module }} from './modules/{feature_name}/{feature_name}.module';"
            ))
            .cyan()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_execute_scaffolds_into_modules_root() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join(DEFAULT_MODULES_ROOT);

        let command = GenerateCommand::new(Some("order".to_string()), root.clone());
        command.execute().unwrap();

        assert!(root.join("order/order.controller.ts").is_file());
    }

    #[test]
    fn test_execute_without_name_fails() {
        let temp_dir = tempdir().unwrap();

        let command = GenerateCommand::new(None, temp_dir.path().to_path_buf());
        let err = command.execute().unwrap_err();

        assert!(err.to_string().contains("provide a feature name"));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
