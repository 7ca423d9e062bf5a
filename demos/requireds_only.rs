// Usage: ./requireds_only source.txt destination.txt
use declargs::{CommandParser, Required, SchemaBuilder};
use std::process::exit;

fn main() {
    let schema = SchemaBuilder::new("requireds_only")
        .required(Required::<String>::new("source").help("Source file"))
        .required(Required::<String>::new("destination").label("dest").help("Destination file"))
        .build()
        .expect("invalid schema");
    let parser = CommandParser::new(schema);
    let mut args = parser.default_container();

    if parser.parse(&mut args).is_err() {
        parser.print_help();
        exit(1);
    }

    let source: &String = args.get("source").unwrap();
    let destination: &String = args.get("destination").unwrap();
    println!("Copying {source} to {destination}");
}
