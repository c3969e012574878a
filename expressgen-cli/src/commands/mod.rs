//! CLI command implementations

pub mod apply;
pub mod tokens;

pub use apply::ApplyCommand;
pub use tokens::TokensCommand;
