use crate::api::Schema;
use crate::container::Container;
use crate::parser::engine;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::printer::Printer;

/// The command line parser for a [`Schema`].
///
/// Owns the help renderer and the output surface; parse failures are reported
/// to the error stream and surfaced as a process exit code.
pub struct CommandParser {
    schema: Schema,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl CommandParser {
    /// Build a parser writing to stdout/stderr, with help text sized to the
    /// current terminal (when one is attached).
    pub fn new(schema: Schema) -> Self {
        let printer = Printer::terminal(&schema);
        Self {
            schema,
            printer,
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_interface(
        schema: Schema,
        user_interface: Box<dyn UserInterface>,
        terminal_width: Option<usize>,
    ) -> Self {
        let printer = Printer::new(&schema, terminal_width);
        Self {
            schema,
            printer,
            user_interface,
        }
    }

    /// Build a container with every field at its declared initial value.
    pub fn default_container(&self) -> Container {
        self.schema.default_container()
    }

    /// Parse the process arguments (`std::env::args`) into `container`.
    ///
    /// On failure, the diagnostic is printed to the error stream and `Err`
    /// carries the suggested process exit code.
    pub fn parse(&self, container: &mut Container) -> Result<(), i32> {
        let tokens: Vec<String> = std::env::args().collect();
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        self.parse_tokens(&tokens, container)
    }

    /// Parse an explicit token sequence into `container`.
    ///
    /// `tokens[0]` must be the program token, mirroring `std::env::args`.
    pub fn parse_tokens(&self, tokens: &[&str], container: &mut Container) -> Result<(), i32> {
        match engine::consume(&self.schema, tokens, container) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.user_interface.print_error(error);
                Err(1)
            }
        }
    }

    /// Print the help text for this parser's schema.
    pub fn print_help(&self) {
        self.printer
            .print_help(self.schema.program(), self.user_interface.as_ref());
    }
}
