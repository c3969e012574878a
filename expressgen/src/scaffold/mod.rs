//! Placeholder-driven scaffolding
//!
//! After the project pipeline has copied its templates into a `dist` tree,
//! the modifiers here fill the placeholder tokens those templates carry:
//! - `src/types/types.ts` - one interface per module, request augmentation
//! - `src/types/enums.ts` - union types for enum attributes, access levels
//! - `src/routes/index.ts` - route imports, registrations, auth endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use expressgen::scaffold::{apply_modifiers, AttributeDescriptor, ModuleDescriptor};
//! use std::path::Path;
//!
//! # async fn example() -> expressgen::Result<()> {
//! let modules = vec![
//!     ModuleDescriptor::new("user").with_auth("email", "password"),
//!     ModuleDescriptor::new("post")
//!         .with_attribute(AttributeDescriptor::with_enum("status", ["DRAFT", "PUBLISHED"])),
//! ];
//!
//! let written = apply_modifiers(Path::new("dist"), &modules).await?;
//! assert_eq!(written.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod helpers;
pub mod modifier;
pub mod modifiers;
pub mod module;
pub mod token;
pub mod writer;

pub use driver::{apply_modifiers, Scaffolder};
pub use helpers::TemplateHelpers;
pub use modifier::{GeneratedFile, Modifier};
pub use modifiers::{EnumsModifier, RoutesModifier, TypesModifier};
pub use module::{find_auth_module, load_modules, AttributeDescriptor, AuthDescriptor, ModuleDescriptor};
pub use token::{PlaceholderToken, Substitutions};
pub use writer::write_partial_module;
