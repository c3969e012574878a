//! Scaffold driver
//!
//! Runs the three modifiers concurrently against one `dist` tree. They
//! touch disjoint files and share nothing mutable, so they are joined on a
//! single task with `tokio::try_join!`: the first failure is returned and
//! the remaining futures are dropped.

use std::path::Path;

use super::modifier::{GeneratedFile, Modifier};
use super::modifiers::{EnumsModifier, RoutesModifier, TypesModifier};
use super::module::ModuleDescriptor;
use super::writer::write_partial_module;
use crate::config::TemplatePaths;
use crate::error::Result;

/// The three modifiers of one generation run
#[derive(Debug, Clone, Default)]
pub struct Scaffolder {
    types: TypesModifier,
    enums: EnumsModifier,
    routes: RoutesModifier,
}

impl Scaffolder {
    /// Modifiers reading the configured template locations
    #[must_use]
    pub fn new(paths: &TemplatePaths) -> Self {
        Self {
            types: TypesModifier::with_path(&paths.types),
            enums: EnumsModifier::with_path(&paths.enums),
            routes: RoutesModifier::with_path(&paths.routes),
        }
    }

    /// Modifiers in run order: enums, types, routes
    #[must_use]
    pub fn modifiers(&self) -> [&dyn Modifier; 3] {
        [&self.enums, &self.types, &self.routes]
    }

    /// Rewrite all three templates in place
    ///
    /// Returns the written files in run order.
    ///
    /// # Errors
    ///
    /// Returns the first read, render or write failure.
    pub async fn apply(&self, dist: &Path, modules: &[ModuleDescriptor]) -> Result<Vec<GeneratedFile>> {
        tracing::debug!(dist = %dist.display(), modules = modules.len(), "applying modifiers");

        let (enums, types, routes) = tokio::try_join!(
            write_partial_module(dist, modules, &self.enums),
            write_partial_module(dist, modules, &self.types),
            write_partial_module(dist, modules, &self.routes),
        )?;

        Ok(vec![enums, types, routes])
    }

    /// Render all three templates without writing anything
    ///
    /// # Errors
    ///
    /// Returns the first read or render failure.
    pub async fn preview(&self, dist: &Path, modules: &[ModuleDescriptor]) -> Result<Vec<GeneratedFile>> {
        let (enums, types, routes) = tokio::try_join!(
            self.enums.modify(dist, modules),
            self.types.modify(dist, modules),
            self.routes.modify(dist, modules),
        )?;

        Ok(vec![enums, types, routes])
    }
}

/// Rewrite the default template locations under `dist`
///
/// # Errors
///
/// Returns the first read, render or write failure.
pub async fn apply_modifiers(dist: &Path, modules: &[ModuleDescriptor]) -> Result<Vec<GeneratedFile>> {
    Scaffolder::default().apply(dist, modules).await
}
