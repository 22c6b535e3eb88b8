//! Command-line surface.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("asmify")
        .about("Generate an AsmResolver builder script from a module description")
        .arg(module_path_arg())
        .arg(output_arg())
}

/// Module description file (positional).
fn module_path_arg() -> Arg {
    Arg::new("module_path")
        .value_name("MODULE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Module description (JSON)")
}

/// Output file (-o/--output).
fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the script to FILE instead of stdout")
}

pub struct GenerateParams {
    pub module_path: PathBuf,
    pub output: Option<PathBuf>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: m
                .get_one::<PathBuf>("module_path")
                .cloned()
                .unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}
