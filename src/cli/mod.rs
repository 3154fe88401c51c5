//! CLI argument parsing

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::config::{defaults, env};
use crate::profile::ServerOverrides;

/// Move a Tableau Server workbook into another project
#[derive(Parser, Debug)]
#[command(name = "tabmove")]
#[command(version)]
#[command(
    about = "Move a Tableau Server workbook between projects",
    long_about = "Move a Tableau Server workbook between projects.\n\n\
                  Signs in, resolves the destination project and the workbook by name, \
                  moves the workbook, and always signs out again.\n\n\
                  Without --workbook/--project the names are prompted for interactively. \
                  The password is read from TABLEAU_PASSWORD or prompted for without echo."
)]
pub struct Cli {
    /// Server address, e.g. https://tableau.example.com
    #[arg(long, env = env::SERVER)]
    pub server: Option<String>,

    /// User to sign in as
    #[arg(short, long, env = env::USERNAME)]
    pub username: Option<String>,

    /// Site content URL (omit for the default site)
    #[arg(long, env = env::SITE)]
    pub site: Option<String>,

    /// REST API version
    #[arg(long, env = env::API_VERSION)]
    pub api_version: Option<String>,

    /// Named profile from ~/.tabmove/config.json
    #[arg(long)]
    pub profile: Option<String>,

    /// Name of the workbook to move (prompted if omitted)
    #[arg(short, long)]
    pub workbook: Option<String>,

    /// Destination project name (prompted if omitted)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Output format for the move summary
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no prompts, no spinners
    #[arg(short = 'b', long, default_value_t = false)]
    pub batch: bool,
}

/// How the one-row move summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a header row
    Table,
    /// Header line plus one record
    Csv,
    /// Pretty-printed object
    Json,
    /// Single mapping
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

impl Cli {
    /// Connection settings given on the command line (or their env vars)
    pub fn server_overrides(&self) -> ServerOverrides<'_> {
        ServerOverrides {
            server: self.server.as_deref(),
            username: self.username.as_deref(),
            site: self.site.as_deref(),
            api_version: self.api_version.as_deref(),
        }
    }
}
