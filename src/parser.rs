mod engine;
mod interface;
mod middleware;
mod printer;

pub use crate::parser::engine::ParseError;
pub use crate::parser::middleware::CommandParser;
