mod core;
mod declaration;

pub use crate::api::core::{ConfigError, Schema, SchemaBuilder};
pub use crate::api::declaration::{Boolean, Optional, Required};
