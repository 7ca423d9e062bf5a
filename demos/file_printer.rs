// Usage: ./file_printer <input> <output> [-c<pattern>] [-t<threads>] [-s] [-r] [--head <lines>] [--tail <lines>]
use declargs::prelude::*;
use declargs::{Advance, Boolean, CommandParser, ConvertError, Optional, Required, SchemaBuilder};
use std::process::exit;

fn positive(text: &str) -> Result<(i32, Advance), ConvertError> {
    let (value, advance) = i32::from_token(text)?;

    if value < 0 {
        return Err(ConvertError::new(text, "positive integer"));
    }

    Ok((value, advance))
}

fn main() {
    let schema = SchemaBuilder::new("file_printer")
        .required(Required::<String>::new("input").help("Input file path"))
        .required(Required::<String>::new("output").help("Output file path"))
        .optional(
            Optional::new("pattern", "".to_string())
                .short('c')
                .long("contains")
                .help("Print only lines containing the pattern"),
        )
        .optional(
            Optional::new("threads", 1u32)
                .short('t')
                .long("threads")
                .help("Number of threads to use"),
        )
        .optional(
            Optional::with_converter("head", -1, positive)
                .long("head")
                .label("lines")
                .help("Number of lines to print from start"),
        )
        .optional(
            Optional::with_converter("tail", -1, positive)
                .long("tail")
                .label("lines")
                .help("Number of lines to print from end"),
        )
        .boolean(Boolean::new("sort").short('s').long("sort").help("Sort lines"))
        .boolean(
            Boolean::new("reverse")
                .short('r')
                .long("reverse")
                .help("Print in reverse"),
        )
        .boolean(Boolean::new("help").long("help").help("Print help"))
        .build()
        .expect("invalid schema");
    let parser = CommandParser::new(schema);
    let mut args = parser.default_container();

    if parser.parse(&mut args).is_err() || *args.get::<bool>("help").unwrap() {
        parser.print_help();
        exit(1);
    }

    println!(
        "Processing {} -> {}",
        args.get::<String>("input").unwrap(),
        args.get::<String>("output").unwrap()
    );
    println!("Threads: {}", args.get::<u32>("threads").unwrap());
    println!("Sorted: {}", args.get::<bool>("sort").unwrap());
    println!("Reverse: {}", args.get::<bool>("reverse").unwrap());
    println!("Head: {}", args.get::<i32>("head").unwrap());
    println!("Tail: {}", args.get::<i32>("tail").unwrap());
}
