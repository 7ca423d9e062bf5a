use thiserror::Error;

use crate::api::Schema;
use crate::container::Container;
use crate::convert::ConvertError;
use crate::model::Advance;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A command line parse failure.
/// The first error encountered terminates the parse; fields resolved before
/// the failure retain their parsed values, unresolved fields their defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer positional tokens were supplied than required arguments declared.
    #[error("not all required arguments included (provided={provided}, expected={expected}).")]
    InsufficientArguments {
        /// Number of tokens supplied (excluding the program token).
        provided: usize,
        /// Number of required arguments declared.
        expected: usize,
    },

    /// An optional flag appeared with no following/inline value.
    #[error("option '{flag}' requires a value.")]
    MissingValue {
        /// The flag spelling as written (`-t` or `--threads`).
        flag: String,
    },

    /// A converter rejected its input; the message originates from the
    /// converter.
    #[error(transparent)]
    Conversion(#[from] ConvertError),

    /// A long-flag value converter consumed only part of its token.
    #[error("couldn't parse argument '{token}' for option '{flag}'.")]
    TrailingUnparsedText {
        /// The flag spelling as written.
        flag: String,
        /// The partially consumed value token.
        token: String,
    },

    /// A flag token matched no declaration.
    #[error("invalid flag '-{run}'.")]
    UnrecognizedFlag {
        /// The unmatched remainder of the flag token, after the leading dash.
        run: String,
    },

    /// A non-flag token appeared after the positional phase.
    #[error("invalid argument '{token}'.")]
    UnrecognizedArgument {
        /// The offending token.
        token: String,
    },

    /// The engine was invoked without a program token.
    /// Signals embedder misuse, not a user input error.
    #[error("internal error - no tokens provided.")]
    InvalidInvocation,
}

/// Walk the token sequence and populate the container.
///
/// `tokens[0]` is the program token.  Positional values are consumed first,
/// contiguously, in declaration order; every remaining token must be a long
/// flag, a combined short-flag run, or a long boolean switch.
pub(crate) fn consume(
    schema: &Schema,
    tokens: &[&str],
    container: &mut Container,
) -> Result<(), ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::InvalidInvocation);
    }

    let expected = schema.required_count();
    let provided = tokens.len() - 1;

    if provided < expected {
        return Err(ParseError::InsufficientArguments { provided, expected });
    }

    for (required, token) in schema.requireds.iter().zip(&tokens[1..=expected]) {
        // Positional values consume the whole token; any remainder the
        // converter reports is discarded.
        (required.write)(token, container)?;

        #[cfg(feature = "tracing_debug")]
        debug!("resolved required '{name}' from '{token}'.", name = required.name);
    }

    let mut index = expected + 1;

    'tokens: while index < tokens.len() {
        let token = tokens[index];

        for optional in &schema.optionals {
            if let Some(long) = &optional.long {
                // Exact equality only: '--thread' never matches '--threads'.
                if token == format!("--{long}") {
                    let flag = format!("--{long}");
                    let value = tokens
                        .get(index + 1)
                        .ok_or_else(|| ParseError::MissingValue { flag: flag.clone() })?;
                    let advance = (optional.write)(value, container)?;

                    if unconsumed(value, advance) {
                        return Err(ParseError::TrailingUnparsedText {
                            flag,
                            token: value.to_string(),
                        });
                    }

                    #[cfg(feature = "tracing_debug")]
                    debug!("resolved option '{name}' from '{value}'.", name = optional.name);

                    index += 2;
                    continue 'tokens;
                }
            }
        }

        for boolean in &schema.booleans {
            if let Some(long) = &boolean.long {
                if token == format!("--{long}") {
                    container.put(&boolean.name, true);

                    #[cfg(feature = "tracing_debug")]
                    debug!("switched '{name}' on.", name = boolean.name);

                    index += 1;
                    continue 'tokens;
                }
            }
        }

        if let Some(run) = token.strip_prefix('-') {
            scan_short_run(schema, run, container)?;
            index += 1;
            continue 'tokens;
        }

        return Err(ParseError::UnrecognizedArgument {
            token: token.to_string(),
        });
    }

    Ok(())
}

/// Scan a combined short-flag run (the token after its leading dash), left to
/// right.
/// Boolean shorts consume one character each; an optional short hands the rest
/// of the run to its converter, which decides how far the cursor moves.
fn scan_short_run(
    schema: &Schema,
    run: &str,
    container: &mut Container,
) -> Result<(), ParseError> {
    // A bare '-' is an empty run, which matches nothing.
    if run.is_empty() {
        return Err(ParseError::UnrecognizedFlag {
            run: String::default(),
        });
    }

    let mut cursor = run;

    'run: while !cursor.is_empty() {
        let head = cursor
            .chars()
            .next()
            .expect("internal error - cursor must be non-empty");

        for boolean in &schema.booleans {
            if boolean.short == Some(head) {
                container.put(&boolean.name, true);
                cursor = &cursor[head.len_utf8()..];

                #[cfg(feature = "tracing_debug")]
                debug!("switched '{name}' on.", name = boolean.name);

                continue 'run;
            }
        }

        for optional in &schema.optionals {
            if optional.short == Some(head) {
                let value = &cursor[head.len_utf8()..];

                if value.is_empty() {
                    return Err(ParseError::MissingValue {
                        flag: format!("-{head}"),
                    });
                }

                let advance = (optional.write)(value, container)?;

                #[cfg(feature = "tracing_debug")]
                debug!("resolved option '{name}' from '{value}'.", name = optional.name);

                match advance {
                    Advance::Consumed => return Ok(()),
                    Advance::Rest(at) => match value.get(at..) {
                        Some(rest) if !rest.is_empty() => {
                            cursor = rest;
                            continue 'run;
                        }
                        _ => return Ok(()),
                    },
                }
            }
        }

        return Err(ParseError::UnrecognizedFlag {
            run: cursor.to_string(),
        });
    }

    Ok(())
}

fn unconsumed(value: &str, advance: Advance) -> bool {
    match advance {
        Advance::Consumed => false,
        Advance::Rest(at) => value.get(at..).is_some_and(|rest| !rest.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Boolean, Optional, Required, SchemaBuilder};
    use rstest::rstest;

    fn file_processor() -> Schema {
        SchemaBuilder::new("file_processor")
            .required(Required::<String>::new("input"))
            .required(Required::<String>::new("output"))
            .optional(Optional::new("threads", 1u32).short('t').long("threads"))
            .boolean(Boolean::new("verbose").short('v').long("verbose"))
            .boolean(Boolean::new("help").short('h').long("help"))
            .build()
            .unwrap()
    }

    fn parse(schema: &Schema, tokens: &[&str]) -> Result<Container, ParseError> {
        let mut container = schema.default_container();
        consume(schema, tokens, &mut container)?;
        Ok(container)
    }

    #[test]
    fn invalid_invocation() {
        let schema = SchemaBuilder::new("program").build().unwrap();
        let error = parse(&schema, &[]).unwrap_err();
        assert_eq!(error, ParseError::InvalidInvocation);
    }

    #[test]
    fn defaults_round_trip() {
        // Setup
        let schema = SchemaBuilder::new("program")
            .optional(Optional::new("threads", 1u32).short('t'))
            .boolean(Boolean::new("verbose").short('v'))
            .build()
            .unwrap();

        // Execute
        let container = parse(&schema, &["program"]).unwrap();

        // Verify
        assert_eq!(container.get::<u32>("threads"), Some(&1));
        assert_eq!(container.get::<bool>("verbose"), Some(&false));
    }

    #[test]
    fn positional_order() {
        let schema = file_processor();
        let container = parse(&schema, &["prog", "x", "y"]).unwrap();
        assert_eq!(container.get::<String>("input"), Some(&"x".to_string()));
        assert_eq!(container.get::<String>("output"), Some(&"y".to_string()));
    }

    #[rstest]
    #[case(&["prog"], 0)]
    #[case(&["prog", "in.txt"], 1)]
    fn insufficient_required(#[case] tokens: &[&str], #[case] provided: usize) {
        let schema = file_processor();
        let error = parse(&schema, tokens).unwrap_err();
        assert_eq!(
            error,
            ParseError::InsufficientArguments {
                provided,
                expected: 2,
            }
        );
    }

    #[test]
    fn required_conversion_failure_is_terminal() {
        // The second positional never resolves once the first fails.
        let schema = SchemaBuilder::new("program")
            .required(Required::<u32>::new("a"))
            .required(Required::<String>::new("b"))
            .build()
            .unwrap();
        let mut container = schema.default_container();

        let error = consume(&schema, &["prog", "x", "kept"], &mut container).unwrap_err();

        assert_matches!(error, ParseError::Conversion(_));
        assert_eq!(container.get::<String>("b"), Some(&"".to_string()));
    }

    #[test]
    fn required_discards_remainder() {
        // '12x' converts to 12 with a remainder; positionals discard it.
        let schema = SchemaBuilder::new("program")
            .required(Required::<u32>::new("count"))
            .build()
            .unwrap();
        let container = parse(&schema, &["prog", "12x"]).unwrap();
        assert_eq!(container.get::<u32>("count"), Some(&12));
    }

    #[test]
    fn long_flag() {
        let schema = file_processor();
        let container = parse(&schema, &["prog", "a", "b", "--threads", "8"]).unwrap();
        assert_eq!(container.get::<u32>("threads"), Some(&8));
    }

    #[test]
    fn long_boolean() {
        let schema = file_processor();
        let container = parse(&schema, &["prog", "a", "b", "--verbose"]).unwrap();
        assert_eq!(container.get::<bool>("verbose"), Some(&true));
    }

    #[test]
    fn long_flag_exactness() {
        let schema = file_processor();
        let error = parse(&schema, &["prog", "a", "b", "--thread", "8"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnrecognizedFlag {
                run: "-thread".to_string(),
            }
        );
        assert_eq!(error.to_string(), "invalid flag '--thread'.");
    }

    #[test]
    fn long_flag_missing_value() {
        let schema = file_processor();
        let error = parse(&schema, &["prog", "a", "b", "--threads"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::MissingValue {
                flag: "--threads".to_string(),
            }
        );
    }

    #[test]
    fn long_flag_trailing_text() {
        let schema = file_processor();
        let error = parse(&schema, &["prog", "a", "b", "--threads", "12x"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::TrailingUnparsedText {
                flag: "--threads".to_string(),
                token: "12x".to_string(),
            }
        );
    }

    #[test]
    fn long_flag_conversion_failure() {
        let schema = file_processor();
        let error = parse(&schema, &["prog", "a", "b", "--threads", "-5"]).unwrap_err();
        assert_matches!(error, ParseError::Conversion(_));
        assert_eq!(error.to_string(), "failed to parse '-5' as u32.");
    }

    #[rstest]
    #[case(&["prog", "a", "b", "-t4"], 4, false)]
    #[case(&["prog", "a", "b", "-vt4"], 4, true)]
    #[case(&["prog", "a", "b", "-t4v"], 4, true)]
    #[case(&["prog", "a", "b", "-v", "-t8"], 8, true)]
    fn combined_short_flags(
        #[case] tokens: &[&str],
        #[case] threads: u32,
        #[case] verbose: bool,
    ) {
        let schema = file_processor();
        let container = parse(&schema, tokens).unwrap();
        assert_eq!(container.get::<u32>("threads"), Some(&threads));
        assert_eq!(container.get::<bool>("verbose"), Some(&verbose));
    }

    #[test]
    fn short_boolean_run() {
        let schema = file_processor();
        let container = parse(&schema, &["prog", "a", "b", "-vh"]).unwrap();
        assert_eq!(container.get::<bool>("verbose"), Some(&true));
        assert_eq!(container.get::<bool>("help"), Some(&true));
    }

    #[test]
    fn short_flag_missing_value() {
        let schema = file_processor();
        let error = parse(&schema, &["prog", "a", "b", "-t"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::MissingValue {
                flag: "-t".to_string(),
            }
        );
    }

    #[rstest]
    #[case(&["prog", "a", "b", "-"], "")]
    #[case(&["prog", "a", "b", "-x"], "x")]
    #[case(&["prog", "a", "b", "-vx"], "x")]
    fn unrecognized_flag(#[case] tokens: &[&str], #[case] run: &str) {
        let schema = file_processor();
        let error = parse(&schema, tokens).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnrecognizedFlag {
                run: run.to_string(),
            }
        );
    }

    #[test]
    fn unrecognized_argument() {
        let schema = file_processor();
        let error = parse(&schema, &["prog", "a", "b", "stray"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnrecognizedArgument {
                token: "stray".to_string(),
            }
        );
    }

    #[test]
    fn no_interleaving() {
        // Positional tokens are consumed greedily at the head; a flag in a
        // positional slot is captured as a positional value.
        let schema = file_processor();
        let container = parse(&schema, &["prog", "-v", "b"]).unwrap();
        assert_eq!(container.get::<String>("input"), Some(&"-v".to_string()));
        assert_eq!(container.get::<bool>("verbose"), Some(&false));
    }

    #[test]
    fn resolved_fields_kept_on_failure() {
        let schema = file_processor();
        let mut container = schema.default_container();

        let error = consume(
            &schema,
            &["prog", "a", "b", "-t4", "stray"],
            &mut container,
        )
        .unwrap_err();

        assert_matches!(error, ParseError::UnrecognizedArgument { .. });
        assert_eq!(container.get::<u32>("threads"), Some(&4));
    }

    #[test]
    fn char_option_chains() {
        // A char argument consumes exactly one character, so it can be chained
        // with further short flags.
        let schema = SchemaBuilder::new("program")
            .optional(Optional::new("delimiter", ',').short('d'))
            .boolean(Boolean::new("verbose").short('v'))
            .build()
            .unwrap();
        let container = parse(&schema, &["prog", "-d;v"]).unwrap();
        assert_eq!(container.get::<char>("delimiter"), Some(&';'));
        assert_eq!(container.get::<bool>("verbose"), Some(&true));
    }
}
