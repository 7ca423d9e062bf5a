use std::fmt::Display;

use crate::container::Container;
use crate::convert::{ConvertError, Converter, FromToken};
use crate::model::Advance;

pub(crate) type SeedFn = Box<dyn Fn(&mut Container)>;
pub(crate) type WriteFn = Box<dyn Fn(&str, &mut Container) -> Result<Advance, ConvertError>>;

/// A required positional argument declaration.
/// Matched strictly by position, in declaration order, at the head of the
/// input.
///
/// ### Example
/// ```
/// use declargs::Required;
///
/// Required::<String>::new("input")
///     .label("input")
///     .help("Input file path");
/// ```
pub struct Required<T> {
    name: String,
    label: Option<String>,
    help: Option<String>,
    converter: Converter<T>,
}

impl<T> Required<T> {
    /// Create a required argument for the field `name`, converting via
    /// [`FromToken`].
    pub fn new(name: impl Into<String>) -> Self
    where
        T: FromToken,
    {
        Self::with_converter(name, T::from_token)
    }

    /// Create a required argument with a custom converter.
    pub fn with_converter(name: impl Into<String>, converter: Converter<T>) -> Self {
        Self {
            name: name.into(),
            label: None,
            help: None,
            converter,
        }
    }

    /// Set the display label used in help text.
    /// Defaults to the field name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label.replace(label.into());
        self
    }

    /// Document the help message for this argument.
    /// If repeated, only the final message applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

pub(crate) struct RequiredDecl {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) help: Option<String>,
    pub(crate) seed: SeedFn,
    pub(crate) write: WriteFn,
}

impl<T: Default + 'static> From<Required<T>> for RequiredDecl {
    fn from(value: Required<T>) -> Self {
        let Required {
            name,
            label,
            help,
            converter,
        } = value;
        let label = label.unwrap_or_else(|| name.clone());
        let write_name = name.clone();
        let write: WriteFn = Box::new(move |text, container| {
            let (parsed, advance) = (converter)(text)?;
            container.put(&write_name, parsed);
            Ok(advance)
        });
        let seed_name = name.clone();
        let seed: SeedFn = Box::new(move |container| container.put(&seed_name, T::default()));

        RequiredDecl {
            name,
            label,
            help,
            seed,
            write,
        }
    }
}

/// An optional flagged argument declaration, with a default value used when
/// the flag is absent.
///
/// At least one of [`Optional::short`]/[`Optional::long`] should be set for
/// the argument to be reachable from the command line; with neither, the
/// field only ever holds its default.
///
/// ### Example
/// ```
/// use declargs::Optional;
///
/// Optional::new("threads", 1u32)
///     .short('t')
///     .long("threads")
///     .help("Number of threads to use");
/// ```
pub struct Optional<T> {
    name: String,
    short: Option<char>,
    long: Option<String>,
    label: Option<String>,
    help: Option<String>,
    default: T,
    precision: Option<usize>,
    converter: Converter<T>,
}

impl<T> Optional<T> {
    /// Create an optional argument for the field `name`, converting via
    /// [`FromToken`].
    pub fn new(name: impl Into<String>, default: T) -> Self
    where
        T: FromToken,
    {
        Self::with_converter(name, default, T::from_token)
    }

    /// Create an optional argument with a custom converter.
    pub fn with_converter(name: impl Into<String>, default: T, converter: Converter<T>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
            label: None,
            help: None,
            default,
            precision: None,
            converter,
        }
    }

    /// Set the single-character short flag (`-t`).
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Set the long flag (`--threads`).
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long.replace(long.into());
        self
    }

    /// Set the argument label used in help text (`-t <label>`).
    /// Defaults to the field name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label.replace(label.into());
        self
    }

    /// Document the help message for this argument.
    /// If repeated, only the final message applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Set the number of decimal places used when rendering the default value
    /// in help text.
    /// Intended for the floating point types.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision.replace(precision);
        self
    }
}

pub(crate) struct OptionalDecl {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) label: String,
    pub(crate) help: Option<String>,
    pub(crate) default_repr: String,
    pub(crate) seed: SeedFn,
    pub(crate) write: WriteFn,
}

impl<T: Display + Clone + 'static> From<Optional<T>> for OptionalDecl {
    fn from(value: Optional<T>) -> Self {
        let Optional {
            name,
            short,
            long,
            label,
            help,
            default,
            precision,
            converter,
        } = value;
        let label = label.unwrap_or_else(|| name.clone());
        let default_repr = match precision {
            Some(precision) => format!("{default:.precision$}"),
            None => default.to_string(),
        };
        let write_name = name.clone();
        let write: WriteFn = Box::new(move |text, container| {
            let (parsed, advance) = (converter)(text)?;
            container.put(&write_name, parsed);
            Ok(advance)
        });
        let seed_name = name.clone();
        let seed: SeedFn =
            Box::new(move |container| container.put(&seed_name, default.clone()));

        OptionalDecl {
            name,
            short,
            long,
            label,
            help,
            default_repr,
            seed,
            write,
        }
    }
}

/// A boolean switch declaration.
/// The field is `false` until the flag is observed, then `true`.
/// Takes no value.
///
/// ### Example
/// ```
/// use declargs::Boolean;
///
/// Boolean::new("verbose").short('v').long("verbose").help("Verbose output");
/// ```
pub struct Boolean {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) help: Option<String>,
}

impl Boolean {
    /// Create a boolean switch for the field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
            help: None,
        }
    }

    /// Set the single-character short flag (`-v`).
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Set the long flag (`--verbose`).
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long.replace(long.into());
        self
    }

    /// Document the help message for this switch.
    /// If repeated, only the final message applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required() {
        // Setup
        let declaration = Required::<u32>::new("threads")
            .label("thread-count")
            .help("help message");

        // Execute
        let decl = RequiredDecl::from(declaration);

        // Verify
        assert_eq!(decl.name, "threads");
        assert_eq!(decl.label, "thread-count");
        assert_eq!(decl.help, Some("help message".to_string()));

        let mut container = Container::new();
        (decl.seed)(&mut container);
        assert_eq!(container.get::<u32>("threads"), Some(&0));

        let advance = (decl.write)("4", &mut container).unwrap();
        assert_eq!(advance, Advance::Consumed);
        assert_eq!(container.get::<u32>("threads"), Some(&4));
    }

    #[test]
    fn required_default_label() {
        let decl = RequiredDecl::from(Required::<String>::new("input"));
        assert_eq!(decl.label, "input");
        assert_eq!(decl.help, None);
    }

    #[test]
    fn required_custom_converter() {
        // Setup
        fn double(text: &str) -> Result<(u32, Advance), ConvertError> {
            let (value, advance) = u32::from_token(text)?;
            Ok((value * 2, advance))
        }

        let decl = RequiredDecl::from(Required::with_converter("threads", double));

        // Execute
        let mut container = Container::new();
        (decl.write)("4", &mut container).unwrap();

        // Verify
        assert_eq!(container.get::<u32>("threads"), Some(&8));
    }

    #[test]
    fn optional() {
        // Setup
        let declaration = Optional::new("threads", 1u32)
            .short('t')
            .long("threads")
            .label("thread-count")
            .help("help message");

        // Execute
        let decl = OptionalDecl::from(declaration);

        // Verify
        assert_eq!(decl.name, "threads");
        assert_eq!(decl.short, Some('t'));
        assert_eq!(decl.long, Some("threads".to_string()));
        assert_eq!(decl.label, "thread-count");
        assert_eq!(decl.help, Some("help message".to_string()));
        assert_eq!(decl.default_repr, "1");

        let mut container = Container::new();
        (decl.seed)(&mut container);
        assert_eq!(container.get::<u32>("threads"), Some(&1));

        let advance = (decl.write)("4v", &mut container).unwrap();
        assert_eq!(advance, Advance::Rest(1));
        assert_eq!(container.get::<u32>("threads"), Some(&4));
    }

    #[test]
    fn optional_unflagged() {
        let decl = OptionalDecl::from(Optional::new("hidden", "x".to_string()));
        assert_eq!(decl.short, None);
        assert_eq!(decl.long, None);
        assert_eq!(decl.label, "hidden");
    }

    #[test]
    fn optional_precision() {
        let decl = OptionalDecl::from(Optional::new("ratio", 0.5f64).precision(3));
        assert_eq!(decl.default_repr, "0.500");

        let decl = OptionalDecl::from(Optional::new("ratio", 0.5f64));
        assert_eq!(decl.default_repr, "0.5");
    }

    #[test]
    fn boolean() {
        let switch = Boolean::new("verbose")
            .short('v')
            .long("verbose")
            .help("help message");

        assert_eq!(switch.name, "verbose");
        assert_eq!(switch.short, Some('v'));
        assert_eq!(switch.long, Some("verbose".to_string()));
        assert_eq!(switch.help, Some("help message".to_string()));
    }
}
