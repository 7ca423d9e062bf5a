use std::collections::HashSet;
use std::fmt::Display;

use thiserror::Error;

use crate::api::declaration::{Boolean, Optional, OptionalDecl, Required, RequiredDecl};
use crate::container::Container;

/// An invalid schema configuration (ex: a repeated field name or flag).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ConfigError(pub(crate) String);

/// The full set of argument declarations for a program.
///
/// Constructed once via [`SchemaBuilder`], read-only afterwards.
/// Drives all three derived artifacts: the default [`Container`], the parse
/// engine, and the help text.
pub struct Schema {
    pub(crate) program: String,
    pub(crate) about: Option<String>,
    pub(crate) requireds: Vec<RequiredDecl>,
    pub(crate) optionals: Vec<OptionalDecl>,
    pub(crate) booleans: Vec<Boolean>,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("program", &self.program)
            .field("about", &self.about)
            .field("requireds", &self.requireds.len())
            .field("optionals", &self.optionals.len())
            .field("booleans", &self.booleans.len())
            .finish()
    }
}

impl Schema {
    /// The program invocation token used in help text.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build a container with every field at its initial value: declared
    /// defaults for optional fields, `false` for boolean fields, and the
    /// type's `Default` for required fields.
    pub fn default_container(&self) -> Container {
        let mut container = Container::new();

        for required in &self.requireds {
            (required.seed)(&mut container);
        }

        for optional in &self.optionals {
            (optional.seed)(&mut container);
        }

        for boolean in &self.booleans {
            container.put(&boolean.name, false);
        }

        container
    }

    pub(crate) fn required_count(&self) -> usize {
        self.requireds.len()
    }
}

/// Builder for a [`Schema`].
///
/// The order of required declarations is their positional order during
/// parsing.
/// The order of optional/boolean declarations does not affect parsing.
///
/// ### Example
/// ```
/// use declargs::{Boolean, Optional, Required, SchemaBuilder};
///
/// let schema = SchemaBuilder::new("file_processor")
///     .required(Required::<String>::new("input").help("Input file path"))
///     .required(Required::<String>::new("output").help("Output file path"))
///     .optional(
///         Optional::new("threads", 1u32)
///             .short('t')
///             .long("threads")
///             .help("Number of threads to use"),
///     )
///     .boolean(Boolean::new("help").short('h').long("help").help("Show help"))
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.program(), "file_processor");
/// ```
pub struct SchemaBuilder {
    program: String,
    about: Option<String>,
    requireds: Vec<RequiredDecl>,
    optionals: Vec<OptionalDecl>,
    booleans: Vec<Boolean>,
}

impl SchemaBuilder {
    /// Create a schema builder for the given program name.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            requireds: Vec::default(),
            optionals: Vec::default(),
            booleans: Vec::default(),
        }
    }

    /// Document the about message for the program, printed in help text.
    /// If repeated, only the final message applies.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add a required positional argument.
    pub fn required<T: Default + 'static>(mut self, declaration: Required<T>) -> Self {
        self.requireds.push(RequiredDecl::from(declaration));
        self
    }

    /// Add an optional flagged argument.
    pub fn optional<T: Display + Clone + 'static>(mut self, declaration: Optional<T>) -> Self {
        self.optionals.push(OptionalDecl::from(declaration));
        self
    }

    /// Add a boolean switch.
    pub fn boolean(mut self, declaration: Boolean) -> Self {
        self.booleans.push(declaration);
        self
    }

    /// Finalize the schema, checking the declarations for consistency:
    /// field names must be unique across all declarations, and no two
    /// declarations may claim the same short or long flag.
    pub fn build(self) -> Result<Schema, ConfigError> {
        let SchemaBuilder {
            program,
            about,
            requireds,
            optionals,
            booleans,
        } = self;

        let mut names: HashSet<&str> = HashSet::default();
        let required_names = requireds.iter().map(|r| r.name.as_str());
        let optional_names = optionals.iter().map(|o| o.name.as_str());
        let boolean_names = booleans.iter().map(|b| b.name.as_str());

        for name in required_names.chain(optional_names).chain(boolean_names) {
            if !names.insert(name) {
                return Err(ConfigError(format!(
                    "field '{name}' is declared multiple times."
                )));
            }
        }

        let mut shorts: HashSet<char> = HashSet::default();
        let optional_shorts = optionals.iter().filter_map(|o| o.short);
        let boolean_shorts = booleans.iter().filter_map(|b| b.short);

        for short in optional_shorts.chain(boolean_shorts) {
            if !shorts.insert(short) {
                return Err(ConfigError(format!(
                    "short flag '-{short}' is declared multiple times."
                )));
            }
        }

        let mut longs: HashSet<&str> = HashSet::default();
        let optional_longs = optionals.iter().filter_map(|o| o.long.as_deref());
        let boolean_longs = booleans.iter().filter_map(|b| b.long.as_deref());

        for long in optional_longs.chain(boolean_longs) {
            if !longs.insert(long) {
                return Err(ConfigError(format!(
                    "long flag '--{long}' is declared multiple times."
                )));
            }
        }

        Ok(Schema {
            program,
            about,
            requireds,
            optionals,
            booleans,
        })
    }
}
