// Usage: ./options_only [-c<config>] [-v] [--disable-cache] [-h]
use declargs::{Boolean, CommandParser, Optional, SchemaBuilder};
use std::process::exit;

fn main() {
    let schema = SchemaBuilder::new("options_only")
        .optional(
            Optional::new("config_file", "config.ini".to_string())
                .short('c')
                .long("config")
                .label("config")
                .help("Configuration file path"),
        )
        .boolean(
            Boolean::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output"),
        )
        .boolean(
            Boolean::new("no_cache")
                .long("disable-cache")
                .help("Disable the use of cache"),
        )
        .boolean(Boolean::new("help").short('h').long("help").help("Show help"))
        .build()
        .expect("invalid schema");
    let parser = CommandParser::new(schema);
    let mut args = parser.default_container();

    // Parse failures fall through; only an explicit -h/--help prints the help.
    let _ = parser.parse(&mut args);

    if *args.get::<bool>("help").unwrap() {
        parser.print_help();
        exit(1);
    }

    let config_file: &String = args.get("config_file").unwrap();
    println!("Configuration file: {config_file}");
    println!(
        "Verbose: {}",
        if *args.get::<bool>("verbose").unwrap() { "On" } else { "Off" }
    );
    println!(
        "Using cache: {}",
        if *args.get::<bool>("no_cache").unwrap() { "No" } else { "Yes" }
    );
}
