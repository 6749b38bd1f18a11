use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "upstream-licenses",
    about = "Generate an attribution document from `cargo license --json` output",
    version
)]
pub struct Cli {
    /// Licenses you are willing to comply with, most preferred first (comma-separated)
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub licenses: Vec<String>,

    /// Dependency manifest produced by `cargo license --json` [default: stdin]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory with one text file per license identifier [default: ./_licenses]
    #[arg(long, env = "LICENSE_FILE_DIR", value_name = "DIR")]
    pub license_dir: Option<PathBuf>,

    /// Attribution document to write [default: UPSTREAM-LICENSES.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./.upstream-licenses/config.toml, fallback ~/.config/upstream-licenses/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Fetch missing license fields from crates.io
    #[arg(long)]
    pub online: bool,

    /// Also list excluded dependencies and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// UPSTREAM-LICENSES.md with embedded license texts
    Markdown,
    /// License groups as JSON on stdout
    Json,
}
