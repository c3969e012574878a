//! The modifier seam
//!
//! A modifier reads one template from the generated tree and returns its
//! path with the post-substitution content. Rendering is pure; the only
//! side effect of [`Modifier::modify`] is the template read.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::module::ModuleDescriptor;
use super::token::PlaceholderToken;
use crate::error::{Result, ScaffoldError};

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute or dist-relative path the content belongs to
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// One template rewrite
#[async_trait]
pub trait Modifier: Send + Sync {
    /// Short name used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Template location relative to the dist tree
    fn relative_path(&self) -> &Path;

    /// Tokens this modifier fills
    fn tokens(&self) -> &'static [PlaceholderToken];

    /// Produce the new content from the template and module list
    ///
    /// # Errors
    ///
    /// Returns an error if more than one module qualifies as the auth module.
    fn render(&self, template: &str, modules: &[ModuleDescriptor]) -> Result<String>;

    /// Read the template under `dist` and render it
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateRead`] if the template is missing or
    /// unreadable, or any error from [`Modifier::render`].
    async fn modify(&self, dist: &Path, modules: &[ModuleDescriptor]) -> Result<GeneratedFile> {
        let path = dist.join(self.relative_path());

        let template = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ScaffoldError::TemplateRead {
                path: path.clone(),
                source,
            })?;

        for token in self.tokens() {
            if token.occurrences(&template) == 0 {
                tracing::warn!(modifier = self.name(), %token, path = %path.display(), "template has no placeholder");
            }
        }

        let content = self.render(&template, modules)?;

        Ok(GeneratedFile {
            path,
            content,
            description: format!("{} for {} module(s)", self.name(), modules.len()),
        })
    }
}

/// Join the trimmed template body and trailing declarations
///
/// Declarations follow after a blank line; the result always ends with a
/// single newline.
pub(crate) fn assemble(body: &str, declarations: &str) -> String {
    let body = body.trim_end();
    let declarations = declarations.trim();

    match (body.is_empty(), declarations.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{body}\n"),
        (true, false) => format!("{declarations}\n"),
        (false, false) => format!("{body}\n\n{declarations}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_layouts() {
        assert_eq!(assemble("", ""), "");
        assert_eq!(assemble("body\n\n", ""), "body\n");
        assert_eq!(assemble("", "decl"), "decl\n");
        assert_eq!(assemble("body", "decl"), "body\n\ndecl\n");
    }
}
