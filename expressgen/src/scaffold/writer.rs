//! Persisting a modifier's output

use std::path::Path;

use super::modifier::{GeneratedFile, Modifier};
use super::module::ModuleDescriptor;
use crate::error::{Result, ScaffoldError};

/// Run `modifier` against `dist` and overwrite its target with the result
///
/// # Errors
///
/// Propagates the modifier's read or render failure, or returns
/// [`ScaffoldError::Write`] if the content cannot be written.
pub async fn write_partial_module<M>(
    dist: &Path,
    modules: &[ModuleDescriptor],
    modifier: &M,
) -> Result<GeneratedFile>
where
    M: Modifier + ?Sized,
{
    let file = modifier.modify(dist, modules).await?;

    tokio::fs::write(&file.path, &file.content)
        .await
        .map_err(|source| ScaffoldError::Write {
            path: file.path.clone(),
            source,
        })?;

    tracing::info!(
        modifier = modifier.name(),
        path = %file.path.display(),
        bytes = file.content.len(),
        "wrote partial module"
    );

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::modifiers::RoutesModifier;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_writes_rendered_content() {
        let dist = tempdir().unwrap();
        let routes = dist.path().join("src/routes");
        tokio::fs::create_dir_all(&routes).await.unwrap();
        tokio::fs::write(routes.join("index.ts"), "$$$ use routes $$$\n").await.unwrap();

        let modules = vec![ModuleDescriptor::new("post")];
        let file = write_partial_module(dist.path(), &modules, &RoutesModifier::default())
            .await
            .unwrap();

        let on_disk = tokio::fs::read_to_string(routes.join("index.ts")).await.unwrap();
        assert_eq!(on_disk, "router.use(postRoutes);\n");
        assert_eq!(file.content, on_disk);
    }

    #[tokio::test]
    async fn test_missing_template_is_read_error() {
        let dist = tempdir().unwrap();
        let result =
            write_partial_module(dist.path(), &[], &RoutesModifier::default()).await;

        assert!(matches!(result, Err(ScaffoldError::TemplateRead { .. })));
        assert!(!dist.path().join("src/routes/index.ts").exists());
    }
}
