//! expressgen: placeholder-driven modifiers for scaffolded Express projects
//!
//! A project pipeline first copies a TypeScript/Express template tree into a
//! `dist` directory. The templates carry literal markers such as
//! `$$$ import routes $$$`; this crate replaces them with text derived from a
//! list of module descriptors (entity names, attributes, enum values and an
//! optional authentication role).
//!
//! The substitution is plain find-and-replace over whole-file text. It has no
//! syntactic awareness of the files it edits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use expressgen::config::ExpressGenConfig;
//! use expressgen::scaffold::{load_modules, Scaffolder};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> expressgen::Result<()> {
//!     let config = ExpressGenConfig::load(None)?;
//!     expressgen::observability::init(&config.logging)?;
//!
//!     let modules = load_modules("modules.json").await?;
//!     Scaffolder::new(&config.templates)
//!         .apply(Path::new("dist"), &modules)
//!         .await?;
//!     Ok(())
//! }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use error::{Result, ScaffoldError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ExpressGenConfig, TemplatePaths};
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::scaffold::{
        apply_modifiers, AttributeDescriptor, AuthDescriptor, GeneratedFile, Modifier,
        ModuleDescriptor, PlaceholderToken, Scaffolder,
    };
}
