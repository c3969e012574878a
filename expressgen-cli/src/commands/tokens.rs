//! Placeholder token report

use anyhow::{Context, Result};
use console::{style, Emoji};
use expressgen::config::ExpressGenConfig;
use expressgen::scaffold::{Modifier, PlaceholderToken, Scaffolder};
use std::path::{Path, PathBuf};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "");

pub struct TokensCommand {
    dist: PathBuf,
}

/// Occurrences of each token a modifier fills
#[derive(Debug, PartialEq, Eq)]
pub struct TokenReport {
    pub path: PathBuf,
    pub counts: Vec<(PlaceholderToken, usize)>,
}

impl TokensCommand {
    pub const fn new(dist: PathBuf) -> Self {
        Self { dist }
    }

    pub async fn execute(&self, config: &ExpressGenConfig) -> Result<()> {
        let scaffolder = Scaffolder::new(&config.templates);

        for modifier in scaffolder.modifiers() {
            let report = scan_template(&self.dist, modifier).await?;

            println!("\n{} {}", style(modifier.name()).cyan().bold(), style(report.path.display()).dim());
            for (token, count) in &report.counts {
                let mark = if *count == 0 { &CROSS } else { &CHECK };
                println!("  {mark}{token} ({count})");
            }
        }

        Ok(())
    }
}

async fn scan_template(dist: &Path, modifier: &dyn Modifier) -> Result<TokenReport> {
    let path = dist.join(modifier.relative_path());
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read template: {}", path.display()))?;

    let counts = modifier
        .tokens()
        .iter()
        .map(|token| (*token, token.occurrences(&content)))
        .collect();

    Ok(TokenReport { path, counts })
}
