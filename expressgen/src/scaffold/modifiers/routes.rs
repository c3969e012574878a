//! Router wiring for `src/routes/index.ts`

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scaffold::modifier::{assemble, Modifier};
use crate::scaffold::module::{find_auth_module, ModuleDescriptor};
use crate::scaffold::token::{PlaceholderToken, Substitutions};

const TOKENS: &[PlaceholderToken] = &[
    PlaceholderToken::IMPORT_CONTROLLERS,
    PlaceholderToken::IMPORT_ROUTES,
    PlaceholderToken::USE_ROUTES,
    PlaceholderToken::IMPORT_AUTHENTICATION_SCHEMA,
    PlaceholderToken::AUTHENTICATION_ROUTES,
];

/// Emits imports, router registrations and authentication routes
#[derive(Debug, Clone)]
pub struct RoutesModifier {
    path: PathBuf,
}

impl Default for RoutesModifier {
    fn default() -> Self {
        Self::with_path("src/routes/index.ts")
    }
}

impl RoutesModifier {
    /// Modifier reading the template at `path` under the dist tree
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `postController, commentController`
    #[must_use]
    pub fn controller_names(modules: &[ModuleDescriptor]) -> String {
        modules
            .iter()
            .map(|module| format!("{}Controller", module.singular_name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One `import <name>Routes from "./<name>.routes";` line per module
    #[must_use]
    pub fn route_imports(modules: &[ModuleDescriptor]) -> String {
        modules
            .iter()
            .map(|module| {
                let name = &module.singular_name;
                format!("import {name}Routes from \"./{name}.routes\";")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One `router.use(<name>Routes);` line per module
    ///
    /// A module with an empty name keeps its (empty) line.
    #[must_use]
    pub fn route_registrations(modules: &[ModuleDescriptor]) -> String {
        modules
            .iter()
            .map(|module| {
                if module.singular_name.is_empty() {
                    String::new()
                } else {
                    format!("router.use({}Routes);", module.singular_name)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Import of the generic and auth-module schemas
    #[must_use]
    pub fn authentication_schema_import(auth_module: &ModuleDescriptor) -> String {
        format!(
            "import {{ authSchema, {}Schema }} from \"../types\";",
            auth_module.singular_name
        )
    }

    /// `/register` and `/authenticate` endpoints
    #[must_use]
    pub fn authentication_routes(auth_module: &ModuleDescriptor) -> String {
        let name = &auth_module.singular_name;
        format!(
            "router.route(\"/register\").post(validateMiddleware({name}Schema), {name}Controller.create);\n\
             router.route(\"/authenticate\").post(validateMiddleware(authSchema), {name}Controller.authenticate);"
        )
    }
}

impl Modifier for RoutesModifier {
    fn name(&self) -> &'static str {
        "routes"
    }

    fn relative_path(&self) -> &Path {
        &self.path
    }

    fn tokens(&self) -> &'static [PlaceholderToken] {
        TOKENS
    }

    fn render(&self, template: &str, modules: &[ModuleDescriptor]) -> Result<String> {
        let auth_module =
            find_auth_module(modules)?.filter(|module| !module.singular_name.is_empty());

        tracing::debug!(
            modules = modules.len(),
            auth = auth_module.map(|module| module.singular_name.as_str()),
            "rendering routes"
        );

        let body = Substitutions::new()
            .with(PlaceholderToken::IMPORT_CONTROLLERS, Self::controller_names(modules))
            .with(PlaceholderToken::IMPORT_ROUTES, Self::route_imports(modules))
            .with(PlaceholderToken::USE_ROUTES, Self::route_registrations(modules))
            .with(
                PlaceholderToken::IMPORT_AUTHENTICATION_SCHEMA,
                auth_module
                    .map(Self::authentication_schema_import)
                    .unwrap_or_default(),
            )
            .with(
                PlaceholderToken::AUTHENTICATION_ROUTES,
                auth_module
                    .map(Self::authentication_routes)
                    .unwrap_or_default(),
            )
            .apply(template.trim())?;

        Ok(assemble(&body, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"import { Router } from "express";
import { $$$ import controllers $$$ } from "../controllers";
$$$ import authentication schema $$$
$$$ import routes $$$

const router = Router();

$$$ authentication routes $$$
$$$ use routes $$$

export default router;
"#;

    fn blog() -> Vec<ModuleDescriptor> {
        vec![ModuleDescriptor::new("post"), ModuleDescriptor::new("comment")]
    }

    #[test]
    fn test_routes_without_auth() {
        let out = RoutesModifier::default().render(TEMPLATE, &blog()).unwrap();

        assert!(out.contains("import { postController, commentController } from \"../controllers\";"));
        assert!(out.contains(
            "import postRoutes from \"./post.routes\";\nimport commentRoutes from \"./comment.routes\";"
        ));
        assert!(out.contains("router.use(postRoutes);\nrouter.use(commentRoutes);"));
        assert!(!out.contains("/register"));
        assert!(!out.contains("/authenticate"));
        assert!(!out.contains("authSchema"));
        assert!(!out.contains("$$$"));
    }

    #[test]
    fn test_routes_with_auth() {
        let mut modules = blog();
        modules.push(ModuleDescriptor::new("user").with_auth("email", "password"));
        let out = RoutesModifier::default().render(TEMPLATE, &modules).unwrap();

        assert!(out.contains("import { authSchema, userSchema } from \"../types\";"));
        assert!(out.contains(
            "router.route(\"/register\").post(validateMiddleware(userSchema), userController.create);"
        ));
        assert!(out.contains(
            "router.route(\"/authenticate\").post(validateMiddleware(authSchema), userController.authenticate);"
        ));
        assert!(out.contains("router.use(userRoutes);"));
    }

    #[test]
    fn test_empty_name_keeps_blank_registration_line() {
        let modules = vec![
            ModuleDescriptor::new("post"),
            ModuleDescriptor::new(""),
            ModuleDescriptor::new("comment"),
        ];
        assert_eq!(
            RoutesModifier::route_registrations(&modules),
            "router.use(postRoutes);\n\nrouter.use(commentRoutes);"
        );
    }

    #[test]
    fn test_no_modules_clears_every_token() {
        let out = RoutesModifier::default().render(TEMPLATE, &[]).unwrap();
        assert!(!out.contains("$$$"));
        assert!(out.contains("import {  } from \"../controllers\";"));
        assert!(out.ends_with("export default router;\n"));
    }
}
