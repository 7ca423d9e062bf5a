//! `declargs` is a declarative command line parser for Rust.
//!
//! Declare the shape of your command line up front - required positional
//! arguments, optional flagged arguments with defaults, and boolean switches -
//! then parse, read, and print help from that single declaration.
//! Specifically, `declargs` prioritizes the following design concerns:
//! * *One declaration, three artifacts*:
//! The [`Schema`] drives the default values, the parse engine, and the help
//! text.
//! None of the three can drift from the others.
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Values are read back from the [`Container`] at their declared types.
//! * *Combined short flags*:
//! A single `-` token may carry several short flags, and an optional flag may
//! be fused with its value: `-vt4` is equivalent to `--verbose --threads 4`.
//! * *Detailed yet basic UX*:
//! Help output is aligned and wrapped to the terminal, but we do not aim to
//! support rich display configurations, such as colour output, shell
//! completions, etc.
//!
//! # Usage
//! Configure `declargs` by starting with a [`SchemaBuilder`] and adding
//! declarations.
//!
//! ```no_run
//! use declargs::{Boolean, CommandParser, Optional, Required, SchemaBuilder};
//! use std::process::exit;
//!
//! let schema = SchemaBuilder::new("file_processor")
//!     .required(Required::<String>::new("input").help("Input file path"))
//!     .optional(
//!         Optional::new("threads", 1u32)
//!             .short('t')
//!             .long("threads")
//!             .help("Number of threads to use"),
//!     )
//!     .boolean(Boolean::new("help").short('h').long("help").help("Show help"))
//!     .build()
//!     .unwrap();
//! let parser = CommandParser::new(schema);
//! let mut args = parser.default_container();
//!
//! if parser.parse(&mut args).is_err() || *args.get::<bool>("help").unwrap() {
//!     parser.print_help();
//!     exit(1);
//! }
//!
//! let input: &String = args.get("input").unwrap();
//! let threads: &u32 = args.get("threads").unwrap();
//! ```
//!
//! ```console
//! $ file_processor -h
//! USAGE:
//!     file_processor <input> [-t<threads>] [-h]
//!
//! ARGUMENTS:
//!     <input>                  Input file path
//!
//! OPTIONS:
//!     -t, --threads <threads>  Number of threads to use (default: 1)
//!     -h, --help               Show help
//!
//! $ file_processor
//! Error: not all required arguments included (provided=0, expected=1).
//! ```
//!
//! # Cli Semantics
//! `declargs` parses the Cli tokens according to the following set of rules.
//! * Required arguments are matched first, positionally, in declaration order.
//! They must be contiguous; flags may not interleave with them.
//! * Long flags match `--NAME` exactly, with the value in the next token:
//! `--threads 4`.
//! * Short flags combine into a single run.
//! Each character either toggles a boolean switch or names an optional flag;
//! an optional flag consumes the remainder of the run as its value.
//! For example, `-vt4` is equivalent to `--verbose --threads 4`.
//! * Converters may consume a token partially.
//! The built-in numeric converters take the longest valid prefix, so `-t4v`
//! reads `4` into `threads` and continues the run at `v`.
//! A partially consumed value is an error after a long flag (`--threads 4x`),
//! and the remainder is discarded for positional arguments.
//!
//! # Features
//! * `tracing_debug`: Emit parse engine tracing at the debug level.
#![deny(missing_docs)]
mod api;
mod constant;
mod container;
mod convert;
mod model;
mod parser;
pub mod prelude;

pub use api::{Boolean, ConfigError, Optional, Required, Schema, SchemaBuilder};
pub use container::Container;
pub use convert::{ConvertError, Converter};
pub use model::Advance;
pub use parser::{CommandParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
