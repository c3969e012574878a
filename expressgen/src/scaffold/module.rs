//! Module descriptors: the entities a generation run scaffolds
//!
//! Descriptors arrive as JSON from the project pipeline:
//!
//! ```json
//! [
//!   {
//!     "singularName": "user",
//!     "attributes": [
//!       { "name": "email" },
//!       { "name": "role", "enum": ["READER", "EDITOR"] }
//!     ],
//!     "auth": { "identifier": "email", "password": "password" }
//!   }
//! ]
//! ```
//!
//! Nothing here validates name uniqueness or identifier legality; malformed
//! descriptors produce malformed generated text.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// One entity to scaffold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    /// Singular name, used verbatim in identifiers and file names
    #[serde(default)]
    pub singular_name: String,

    /// Ordered attribute list
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,

    /// Authentication role, present on the auth-bearing entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthDescriptor>,
}

impl ModuleDescriptor {
    /// Descriptor with a name and no attributes
    pub fn new(singular_name: impl Into<String>) -> Self {
        Self {
            singular_name: singular_name.into(),
            ..Self::default()
        }
    }

    /// Append an attribute
    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Mark this module as the authentication entity
    #[must_use]
    pub fn with_auth(mut self, identifier: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(AuthDescriptor {
            identifier: Some(serde_json::Value::String(identifier.into())),
            password: Some(serde_json::Value::String(password.into())),
        });
        self
    }

    /// Whether `auth` names both an identifier and a password field
    #[must_use]
    pub fn is_auth_module(&self) -> bool {
        self.auth.as_ref().is_some_and(AuthDescriptor::is_complete)
    }
}

/// One attribute of a module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Attribute name
    pub name: String,

    /// Literal values for an enum-typed attribute
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
}

impl AttributeDescriptor {
    /// Primitive-typed attribute
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enum_values: None,
        }
    }

    /// Enum-typed attribute with string values
    pub fn with_enum<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            enum_values: Some(
                values
                    .into_iter()
                    .map(|value| serde_json::Value::String(value.into()))
                    .collect(),
            ),
        }
    }

    /// The enum values, only when the list is present and non-empty
    #[must_use]
    pub fn enum_values(&self) -> Option<&[serde_json::Value]> {
        self.enum_values
            .as_deref()
            .filter(|values| !values.is_empty())
    }
}

/// Fields backing authentication on the auth module
///
/// The pipeline may send either an attribute name or a full field
/// descriptor object, so both are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthDescriptor {
    /// Field used as the login identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<serde_json::Value>,

    /// Field holding the password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<serde_json::Value>,
}

impl AuthDescriptor {
    /// Both fields present and truthy
    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_truthy(self.identifier.as_ref()) && is_truthy(self.password.as_ref())
    }
}

/// `null`, `false`, zero and the empty string are unset; everything else is set
fn is_truthy(value: Option<&serde_json::Value>) -> bool {
    use serde_json::Value;

    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Find the unique module whose auth descriptor is complete
///
/// At most one module may qualify. No qualifying module is `Ok(None)`,
/// not an error.
///
/// # Errors
///
/// Returns [`ScaffoldError::MultipleAuthModules`] when more than one module
/// qualifies.
pub fn find_auth_module(modules: &[ModuleDescriptor]) -> Result<Option<&ModuleDescriptor>> {
    let mut qualifying = modules.iter().filter(|module| module.is_auth_module());

    let Some(first) = qualifying.next() else {
        return Ok(None);
    };

    let rest: Vec<_> = qualifying.collect();
    if rest.is_empty() {
        return Ok(Some(first));
    }

    Err(ScaffoldError::MultipleAuthModules {
        names: std::iter::once(first)
            .chain(rest)
            .map(|module| module.singular_name.clone())
            .collect(),
    })
}

/// Read a JSON array of module descriptors
///
/// # Errors
///
/// Returns [`ScaffoldError::ModuleRead`] if the file cannot be read and
/// [`ScaffoldError::ModuleParse`] if it is not a descriptor array.
pub async fn load_modules(path: impl AsRef<Path>) -> Result<Vec<ModuleDescriptor>> {
    let path = path.as_ref();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::ModuleRead {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| ScaffoldError::ModuleParse {
        path: path.to_path_buf(),
        source,
    })
}
