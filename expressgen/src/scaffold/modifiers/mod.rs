//! The three template modifiers

pub mod enums;
pub mod routes;
pub mod types;

pub use enums::EnumsModifier;
pub use routes::RoutesModifier;
pub use types::TypesModifier;
