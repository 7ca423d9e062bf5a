//! Traits which, typically, may be imported without concern: `use declargs::prelude::*`.

// Needs to be imported in order to use the default converters.
pub use crate::convert::FromToken;
