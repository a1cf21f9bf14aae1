//! Clap command tree.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the `pathcollector` command.
pub fn build_cli() -> Command {
    Command::new("pathcollector")
        .about("Inspect, import and evaluate gesture trace repositories")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("root")
                .long("root")
                .global(true)
                .value_name("DIR")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Repository root (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print JSON instead of text"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level (RUST_LOG takes precedence)"),
        )
        .subcommand(Command::new("list").about("List every stored trace by tag"))
        .subcommand(
            Command::new("show")
                .about("Print the markup of one trace")
                .arg(Arg::new("tag").required(true))
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Capture gestures from a samples file and push them")
                .arg(
                    Arg::new("samples")
                        .required(true)
                        .value_parser(value_parser!(std::path::PathBuf)),
                )
                .arg(
                    Arg::new("tag")
                        .long("tag")
                        .value_name("TAG")
                        .help("Store every gesture under TAG instead of rotating tags"),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about("Score the random baseline classifier against stored traces")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("N")
                        .value_parser(value_parser!(u64)),
                ),
        )
}
