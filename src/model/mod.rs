//! Domain models and parameter types.
//!
//! Entity models are converted to these types at the repository boundary so that
//! services work with parsed Discord ids and engine types rather than raw columns.

pub mod level;
pub mod member;
pub mod player;
pub mod server;
