//! Module file templates and rendering
//!
//! Each of the eight generated files has exactly one fixed template, kept
//! verbatim as a string constant in [`files`] and registered under a stable
//! name. Substitution knows only two variables, `feature_name` and
//! `class_name`; the same pair always renders identical bytes.

use handlebars::Handlebars;

use crate::error::ScaffoldError;

pub mod files;

pub use files::*;

/// Registry owning the eight compiled module templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Create a registry with every module template registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new() -> Result<Self, ScaffoldError> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping; the rendered output is TypeScript, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_template_string("entity", ENTITY_TS)?;
        handlebars.register_template_string("create-dto", CREATE_DTO_TS)?;
        handlebars.register_template_string("update-dto", UPDATE_DTO_TS)?;
        handlebars.register_template_string("service", SERVICE_TS)?;
        handlebars.register_template_string("controller", CONTROLLER_TS)?;
        handlebars.register_template_string("module", MODULE_TS)?;
        handlebars.register_template_string("service-spec", SERVICE_SPEC_TS)?;
        handlebars.register_template_string("controller-spec", CONTROLLER_SPEC_TS)?;

        Ok(Self { handlebars })
    }

    /// Render a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is unknown or rendering fails.
    pub fn render(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, ScaffoldError> {
        Ok(self.handlebars.render(name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_compiles_all_templates() {
        assert!(TemplateRegistry::new().is_ok());
    }

    #[test]
    fn test_render_substitutes_both_variables() {
        let registry = TemplateRegistry::new().unwrap();
        let context = json!({
            "feature_name": "user-log",
            "class_name": "UserLog",
        });

        let entity = registry.render("entity", &context).unwrap();
        assert!(entity.contains("@Entity({ name: 'user-logs' })"));
        assert!(entity.contains("export class UserLog {"));
        assert!(!entity.contains("{{"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let registry = TemplateRegistry::new().unwrap();
        let context = json!({
            "feature_name": "order",
            "class_name": "Order",
        });

        let first = registry.render("controller", &context).unwrap();
        let second = registry.render("controller", &context).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let registry = TemplateRegistry::new().unwrap();
        let context = json!({});
        assert!(registry.render("middleware", &context).is_err());
    }

    #[test]
    fn test_render_does_not_escape_code() {
        let registry = TemplateRegistry::new().unwrap();
        let context = json!({
            "feature_name": "user",
            "class_name": "User",
        });

        // Generated TypeScript is full of characters HTML escaping would mangle
        let service = registry.render("service", &context).unwrap();
        assert!(service.contains("Repository<User>"));
        assert!(service.contains("async findAll(): Promise<User[]>"));
    }
}
