//! Feature module generator
//!
//! This module coordinates the generation of one CRUD feature module. A run
//! walks a fixed pipeline: derive the names, refuse to overwrite an existing
//! module, render all eight files in memory, then create the directory
//! structure and write the files in emission order:
//! - `TypeORM` entity
//! - Create and update `DTOs`
//! - Service
//! - Controller
//! - Module wiring
//! - Jest spec stubs for service and controller

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use crate::error::ScaffoldError;
use crate::scaffold::naming::NameHelpers;
use crate::templates::TemplateRegistry;

/// Subdirectories created inside a new feature module
const MODULE_DIRS: [&str; 3] = ["", "entities", "dto"];

/// Feature module generator
pub struct Scaffolder {
    /// Kebab-case feature name (directories, file names, routes)
    feature_name: String,
    /// Class name for generated TypeScript symbols
    class_name: String,
    /// Directory feature modules are created under
    modules_root: PathBuf,
    /// Template registry
    templates: TemplateRegistry,
}

impl Scaffolder {
    /// Create a new scaffolder for the given feature name.
    ///
    /// # Arguments
    ///
    /// * `name` - Raw feature name from the command line (e.g., `product`,
    ///   `UserLog`)
    /// * `modules_root` - Directory feature modules live under (e.g.,
    ///   `src/modules`)
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingName`] when `name` is empty,
    /// [`ScaffoldError::ModuleExists`] when the target directory is already
    /// present, or a template error if a template fails to compile.
    pub fn new(name: &str, modules_root: impl Into<PathBuf>) -> Result<Self, ScaffoldError> {
        if name.is_empty() {
            return Err(ScaffoldError::MissingName);
        }

        let feature_name = NameHelpers::feature_name(name);
        let modules_root = modules_root.into();

        // A plain file with the module's name blocks creation just as a
        // directory does
        if modules_root.join(&feature_name).exists() {
            return Err(ScaffoldError::ModuleExists { name: feature_name });
        }

        Ok(Self {
            feature_name,
            class_name: NameHelpers::class_name(name),
            modules_root,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Kebab-case feature name derived from the input.
    #[must_use]
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    /// Class name derived from the input.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Directory the module is created at.
    #[must_use]
    pub fn module_dir(&self) -> PathBuf {
        self.modules_root.join(&self.feature_name)
    }

    /// Template variables shared by every file of the module.
    fn template_context(&self) -> serde_json::Value {
        json!({
            "feature_name": self.feature_name,
            "class_name": self.class_name,
        })
    }

    /// Render all eight module files in emission order, without touching
    /// the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        Ok(vec![
            self.generate_entity()?,
            self.generate_create_dto()?,
            self.generate_update_dto()?,
            self.generate_service()?,
            self.generate_controller()?,
            self.generate_module()?,
            self.generate_service_spec()?,
            self.generate_controller_spec()?,
        ])
    }

    /// Render every file, create the module directories, and write the
    /// files sequentially.
    ///
    /// All renders are staged in memory before the first write. Each file is
    /// then written independently; a failed write aborts the run and leaves
    /// the files written before it in place.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, directory creation, or a file write
    /// fails.
    pub fn scaffold(&self) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let files = self.generate()?;

        self.create_structure()?;
        for file in &files {
            fs::write(self.modules_root.join(&file.path), &file.content)?;
        }

        Ok(files)
    }

    /// Create the module directory with its `entities/` and `dto/`
    /// subdirectories, including any missing parents of the modules root.
    fn create_structure(&self) -> Result<(), ScaffoldError> {
        let module_dir = self.module_dir();
        for dir in &MODULE_DIRS {
            fs::create_dir_all(module_dir.join(dir))?;
        }
        Ok(())
    }

    /// Generate the `TypeORM` entity file
    fn generate_entity(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self.templates.render("entity", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/entities/{name}.entity.ts")),
            content,
            description: format!("TypeORM entity for {}", self.class_name),
        })
    }

    /// Generate the create DTO file
    fn generate_create_dto(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self.templates.render("create-dto", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/dto/create-{name}.dto.ts")),
            content,
            description: format!("Create DTO for {}", self.class_name),
        })
    }

    /// Generate the update DTO file
    fn generate_update_dto(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self.templates.render("update-dto", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/dto/update-{name}.dto.ts")),
            content,
            description: format!("Update DTO for {}", self.class_name),
        })
    }

    /// Generate the CRUD service file
    fn generate_service(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self.templates.render("service", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/{name}.service.ts")),
            content,
            description: format!("CRUD service for {}", self.class_name),
        })
    }

    /// Generate the REST controller file
    fn generate_controller(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self.templates.render("controller", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/{name}.controller.ts")),
            content,
            description: format!("REST controller for {}", self.class_name),
        })
    }

    /// Generate the `NestJS` module wiring file
    fn generate_module(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self.templates.render("module", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/{name}.module.ts")),
            content,
            description: format!("Module wiring for {}", self.class_name),
        })
    }

    /// Generate the Jest spec stub for the service
    fn generate_service_spec(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self
            .templates
            .render("service-spec", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/{name}.service.spec.ts")),
            content,
            description: format!("Jest stub for {}Service", self.class_name),
        })
    }

    /// Generate the Jest spec stub for the controller
    fn generate_controller_spec(&self) -> Result<GeneratedFile, ScaffoldError> {
        let content = self
            .templates
            .render("controller-spec", &self.template_context())?;
        let name = &self.feature_name;

        Ok(GeneratedFile {
            path: PathBuf::from(format!("{name}/{name}.controller.spec.ts")),
            content,
            description: format!("Jest stub for {}Controller", self.class_name),
        })
    }
}

/// Represents a generated file
#[derive(Debug)]
pub struct GeneratedFile {
    /// Relative path from the modules root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}
