// Usage: ./file_processor <input> <output> [-t<threads>] [-h]
use declargs::{Boolean, CommandParser, Optional, Required, SchemaBuilder};
use std::process::exit;

fn main() {
    let schema = SchemaBuilder::new("file_processor")
        .required(Required::<String>::new("input").help("Input file path"))
        .required(Required::<String>::new("output").help("Output file path"))
        .optional(
            Optional::new("threads", 1u32)
                .short('t')
                .long("threads")
                .help("Number of threads to use"),
        )
        .boolean(Boolean::new("help").short('h').long("help").help("Show help"))
        .build()
        .expect("invalid schema");
    let parser = CommandParser::new(schema);
    let mut args = parser.default_container();

    if parser.parse(&mut args).is_err() || *args.get::<bool>("help").unwrap() {
        parser.print_help();
        exit(1);
    }

    let input: &String = args.get("input").unwrap();
    let output: &String = args.get("output").unwrap();
    let threads: &u32 = args.get("threads").unwrap();
    println!("Processing {input} -> {output}");
    println!("Threads: {threads}");
}
