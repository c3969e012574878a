//! Apply the modifiers to a dist tree
//!
//! # Example
//!
//! ```bash
//! expressgen apply ./dist --modules modules.json
//! expressgen apply ./dist --modules modules.json --dry-run
//! ```

use anyhow::{Context, Result};
use console::{style, Emoji};
use expressgen::config::ExpressGenConfig;
use expressgen::scaffold::{load_modules, GeneratedFile, Scaffolder};
use similar::{ChangeTag, TextDiff};
use std::path::PathBuf;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");

pub struct ApplyCommand {
    dist: PathBuf,
    modules: PathBuf,
    dry_run: bool,
}

impl ApplyCommand {
    pub const fn new(dist: PathBuf, modules: PathBuf, dry_run: bool) -> Self {
        Self {
            dist,
            modules,
            dry_run,
        }
    }

    pub async fn execute(&self, config: &ExpressGenConfig) -> Result<()> {
        if !self.dist.is_dir() {
            anyhow::bail!("Dist directory not found: {}", self.dist.display());
        }

        let modules = load_modules(&self.modules)
            .await
            .with_context(|| format!("Failed to load modules from {}", self.modules.display()))?;

        tracing::debug!(
            dist = %self.dist.display(),
            modules = modules.len(),
            dry_run = self.dry_run,
            "loaded module descriptors"
        );

        println!(
            "\n{} {} {}",
            style("Scaffolding").cyan().bold(),
            style(modules.len()).green().bold(),
            style("module(s)...").cyan().bold()
        );

        let scaffolder = Scaffolder::new(&config.templates);

        if self.dry_run {
            let files = scaffolder
                .preview(&self.dist, &modules)
                .await
                .context("Failed to render templates")?;

            for file in &files {
                print_diff(file).await?;
            }

            tracing::info!(files = files.len(), "dry run complete");
            println!("\n{}", style("Dry run: no files written").yellow());
            return Ok(());
        }

        let files = scaffolder
            .apply(&self.dist, &modules)
            .await
            .context("Failed to apply modifiers")?;

        tracing::info!(files = files.len(), "templates updated");

        println!("\n{} {} files:", style("Updated").green().bold(), files.len());
        for file in &files {
            println!(
                "  {}{} ({})",
                CHECK,
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        Ok(())
    }
}

/// Print a line diff of the template on disk against its rendered content
async fn print_diff(file: &GeneratedFile) -> Result<()> {
    let current = tokio::fs::read_to_string(&file.path)
        .await
        .with_context(|| format!("Failed to read {}", file.path.display()))?;

    println!("\n{FILE}{}", style(file.path.display()).bold());

    let diff = TextDiff::from_lines(&current, &file.content);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
            ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
            ChangeTag::Equal => print!(" {change}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_dist_is_rejected() {
        let dir = tempdir().unwrap();
        let cmd = ApplyCommand::new(dir.path().join("dist"), dir.path().join("modules.json"), false);

        let result = cmd.execute(&ExpressGenConfig::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dry_run_leaves_templates_untouched() {
        let dir = tempdir().unwrap();
        let dist = dir.path().join("dist");
        for (relative, content) in [
            ("src/types/types.ts", "$$$ request authorization $$$"),
            ("src/types/enums.ts", "$$$ authorization types $$$"),
            ("src/routes/index.ts", "$$$ use routes $$$"),
        ] {
            let path = dist.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let modules = dir.path().join("modules.json");
        std::fs::write(&modules, r#"[{ "singularName": "post" }]"#).unwrap();

        let cmd = ApplyCommand::new(dist.clone(), modules.clone(), true);
        cmd.execute(&ExpressGenConfig::default()).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(dist.join("src/routes/index.ts")).unwrap(),
            "$$$ use routes $$$"
        );

        let cmd = ApplyCommand::new(dist.clone(), modules, false);
        cmd.execute(&ExpressGenConfig::default()).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(dist.join("src/routes/index.ts")).unwrap(),
            "router.use(postRoutes);\n"
        );
    }
}
