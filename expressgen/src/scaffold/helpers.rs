//! Naming helpers for generated TypeScript identifiers
//!
//! Every helper is a pure function of its input; no locale or global
//! configuration is consulted.

use inflector::Inflector;

/// Naming helpers used by the modifiers
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Pluralize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use expressgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("post"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// assert_eq!(TemplateHelpers::pluralize("status"), "statuses");
    /// ```
    ///
    /// # Note
    ///
    /// The inflector library has known limitations with some irregular plurals.
    /// Attribute names are typically regular words.
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    /// Uppercase the first character, leaving the rest untouched
    ///
    /// # Examples
    ///
    /// ```
    /// # use expressgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::capitalize_first("user"), "User");
    /// assert_eq!(TemplateHelpers::capitalize_first("userProfile"), "UserProfile");
    /// assert_eq!(TemplateHelpers::capitalize_first("user_profile"), "User_profile");
    /// assert_eq!(TemplateHelpers::capitalize_first(""), "");
    /// ```
    #[must_use]
    pub fn capitalize_first(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Type-level name for a module or attribute (`user` -> `User`)
    #[must_use]
    pub fn to_type_name(input: &str) -> String {
        Self::capitalize_first(input)
    }

    /// Name of the runtime constant holding an attribute's values
    ///
    /// # Examples
    ///
    /// ```
    /// # use expressgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_collection_name("status"), "Statuses");
    /// assert_eq!(TemplateHelpers::to_collection_name("role"), "Roles");
    /// ```
    #[must_use]
    pub fn to_collection_name(input: &str) -> String {
        Self::capitalize_first(&Self::pluralize(input))
    }

    /// Interface name declared for a module (`post` -> `PostInterface`)
    #[must_use]
    pub fn to_interface_name(singular_name: &str) -> String {
        format!("{}Interface", Self::to_type_name(singular_name))
    }
}
