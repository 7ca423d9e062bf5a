use crate::parser::engine::ParseError;

/// Output surface for help text and parse diagnostics.
/// Help goes to the regular stream; errors go to the error stream, prefixed
/// `Error: `.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Error: {error}");
    }
}
