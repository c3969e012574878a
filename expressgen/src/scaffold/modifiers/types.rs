//! Interface declarations for `src/types/types.ts`

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scaffold::helpers::TemplateHelpers;
use crate::scaffold::modifier::{assemble, Modifier};
use crate::scaffold::module::{find_auth_module, ModuleDescriptor};
use crate::scaffold::token::{PlaceholderToken, Substitutions};

const TOKENS: &[PlaceholderToken] = &[PlaceholderToken::REQUEST_AUTHORIZATION];

/// Emits one interface per module and the authenticated-request augmentation
#[derive(Debug, Clone)]
pub struct TypesModifier {
    path: PathBuf,
}

impl Default for TypesModifier {
    fn default() -> Self {
        Self::with_path("src/types/types.ts")
    }
}

impl TypesModifier {
    /// Modifier reading the template at `path` under the dist tree
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `declare module` block giving every request an optional `client`
    #[must_use]
    pub fn request_augmentation(auth_module: &ModuleDescriptor) -> String {
        format!(
            "declare module \"express-serve-static-core\" {{\n  interface Request {{\n    client?: {}Interface;\n  }}\n}}",
            auth_module.singular_name
        )
    }

    /// Interface declaration for one module
    #[must_use]
    pub fn interface_declaration(module: &ModuleDescriptor) -> String {
        format!(
            "export interface {} extends EntityInformationInterface, z.infer<typeof schemas.{}Schema> {{}};",
            TemplateHelpers::to_interface_name(&module.singular_name),
            module.singular_name
        )
    }
}

impl Modifier for TypesModifier {
    fn name(&self) -> &'static str {
        "types"
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
            "rendering types"
        );

        let augmentation = auth_module.map(Self::request_augmentation).unwrap_or_default();
        let body = Substitutions::new()
            .with(PlaceholderToken::REQUEST_AUTHORIZATION, augmentation)
            .apply(template.trim())?;

        let declarations = modules
            .iter()
            .map(Self::interface_declaration)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(assemble(&body, &declarations))
    }
}
