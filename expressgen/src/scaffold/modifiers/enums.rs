//! Union-type declarations for `src/types/enums.ts`

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scaffold::helpers::TemplateHelpers;
use crate::scaffold::modifier::{assemble, Modifier};
use crate::scaffold::module::{find_auth_module, AttributeDescriptor, ModuleDescriptor};
use crate::scaffold::token::{PlaceholderToken, Substitutions};

const TOKENS: &[PlaceholderToken] = &[PlaceholderToken::AUTHORIZATION_TYPES];

/// Access levels granted to the auth module's records
pub const ACCESS_TYPES: [&str; 3] = ["ADMIN", "APPROVED", "DENIED"];

/// Emits a const array and derived type per enum attribute, plus access levels
#[derive(Debug, Clone)]
pub struct EnumsModifier {
    path: PathBuf,
}

impl Default for EnumsModifier {
    fn default() -> Self {
        Self::with_path("src/types/enums.ts")
    }
}

impl EnumsModifier {
    /// Modifier reading the template at `path` under the dist tree
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `AccessTypes` const array and `AccessTypesEnum` type
    #[must_use]
    pub fn access_types() -> String {
        let values = ACCESS_TYPES.map(|value| format!("\"{value}\"")).join(", ");
        union_declaration("AccessTypes", "AccessTypesEnum", &values)
    }

    /// Declaration pair for an enum attribute, `None` for primitive attributes
    #[must_use]
    pub fn attribute_declaration(attribute: &AttributeDescriptor) -> Option<String> {
        let values = attribute.enum_values()?;

        // serde_json renders each literal exactly as JSON.stringify would
        let literals = values
            .iter()
            .map(serde_json::Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Some(union_declaration(
            &TemplateHelpers::to_collection_name(&attribute.name),
            &format!("{}Enum", TemplateHelpers::to_type_name(&attribute.name)),
            &literals,
        ))
    }
}

fn union_declaration(constant: &str, type_name: &str, literals: &str) -> String {
    format!(
        "export const {constant} = [{literals}] as const;\nexport type {type_name} = (typeof {constant})[number];"
    )
}

impl Modifier for EnumsModifier {
    fn name(&self) -> &'static str {
        "enums"
    }

    fn relative_path(&self) -> &Path {
        &self.path
    }

    fn tokens(&self) -> &'static [PlaceholderToken] {
        TOKENS
    }

    fn render(&self, template: &str, modules: &[ModuleDescriptor]) -> Result<String> {
        let auth_module = find_auth_module(modules)?;

        let access_types = auth_module.map(|_| Self::access_types()).unwrap_or_default();
        let body = Substitutions::new()
            .with(PlaceholderToken::AUTHORIZATION_TYPES, access_types)
            .apply(template.trim())?;

        let declarations: Vec<String> = modules
            .iter()
            .flat_map(|module| module.attributes.iter())
            .filter_map(Self::attribute_declaration)
            .collect();

        tracing::debug!(
            modules = modules.len(),
            enums = declarations.len(),
            access_types = auth_module.is_some(),
            "rendering enums"
        );

        Ok(assemble(&body, &declarations.join("\n\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: &str = "$$$ authorization types $$$\n";

    #[test]
    fn test_status_attribute() {
        let modules = vec![ModuleDescriptor::new("ticket")
            .with_attribute(AttributeDescriptor::with_enum("status", ["OPEN", "CLOSED"]))];
        let out = EnumsModifier::default().render(TEMPLATE, &modules).unwrap();

        assert_eq!(
            out,
            "export const Statuses = [\"OPEN\", \"CLOSED\"] as const;\nexport type StatusEnum = (typeof Statuses)[number];\n"
        );
    }

    #[test]
    fn test_access_types_only_with_auth_module() {
        let without = EnumsModifier::default()
            .render(TEMPLATE, &[ModuleDescriptor::new("post")])
            .unwrap();
        assert!(!without.contains("AccessTypes"));
        assert!(!without.contains("$$$"));

        let with = EnumsModifier::default()
            .render(
                TEMPLATE,
                &[ModuleDescriptor::new("User").with_auth("email", "password")],
            )
            .unwrap();
        assert!(with.contains("export const AccessTypes = [\"ADMIN\", \"APPROVED\", \"DENIED\"] as const;"));
        assert!(with.contains("export type AccessTypesEnum = (typeof AccessTypes)[number];"));
    }

    #[test]
    fn test_primitive_attributes_emit_nothing() {
        let modules = vec![ModuleDescriptor::new("post")
            .with_attribute(AttributeDescriptor::new("title"))
            .with_attribute(AttributeDescriptor {
                name: "labels".to_string(),
                enum_values: Some(vec![]),
            })];
        let out = EnumsModifier::default().render(TEMPLATE, &modules).unwrap();

        assert!(!out.contains("Title"));
        assert!(!out.contains("title"));
        assert!(!out.contains("Labels"));
        assert!(!out.contains("label"));
        assert_eq!(out, "");
    }

    #[test]
    fn test_values_are_json_escaped() {
        let attribute = AttributeDescriptor {
            name: "quote".to_string(),
            enum_values: Some(vec![json!("say \"hi\""), json!("back\\slash"), json!(3)]),
        };
        let declaration = EnumsModifier::attribute_declaration(&attribute).unwrap();

        assert!(declaration.contains(r#"["say \"hi\"", "back\\slash", 3]"#));
        assert!(declaration.contains("export type QuoteEnum = (typeof Quotes)[number];"));
    }

    #[test]
    fn test_module_then_attribute_order() {
        let modules = vec![
            ModuleDescriptor::new("post")
                .with_attribute(AttributeDescriptor::with_enum("visibility", ["PUBLIC"]))
                .with_attribute(AttributeDescriptor::with_enum("kind", ["NEWS"])),
            ModuleDescriptor::new("comment")
                .with_attribute(AttributeDescriptor::with_enum("state", ["SHOWN"])),
        ];
        let out = EnumsModifier::default().render("", &modules).unwrap();

        let visibility = out.find("VisibilityEnum").unwrap();
        let kind = out.find("KindEnum").unwrap();
        let state = out.find("StateEnum").unwrap();
        assert!(visibility < kind && kind < state);
        assert!(out.contains("[number];\n\nexport const Kinds"));
    }
}
