//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Command-line client for the Fake Store product catalog API
///
/// Commands: `GET products`, `GET products/<id>`,
/// `POST products <title> <price> <category>`, `DELETE products/<id>`
#[derive(Parser, Debug)]
#[command(name = "storectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Catalog API base URL (overrides config and STORECTL_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file layered over the global config
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub generate: Option<clap_complete::Shell>,

    /// GET, POST or DELETE
    pub command: Option<String>,

    /// products or products/<id>
    pub resource: Option<String>,

    /// Command arguments (POST: <title> <price> <category>)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
