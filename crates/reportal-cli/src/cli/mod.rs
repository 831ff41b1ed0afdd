//! CLI for the Reportal helper routines.

mod ambient;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use reportal_core::config::{self, ReportalConfig};

use commands::{
    run_coerce, run_deserialize, run_event, run_fetch, run_log, run_mixin, run_query_var,
    run_serialize,
};

/// Top-level CLI for the Reportal helpers.
#[derive(Debug, Parser)]
#[command(name = "reportal")]
#[command(about = "Reportal: query-string codec and report cell helpers", long_about = None)]
pub struct Cli {
    /// Ambient location URL (overrides REPORTAL_LOCATION and the config default).
    #[arg(long, global = true, value_name = "URL")]
    pub location: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the value of the first query pair named NAME (case-insensitive).
    QueryVar {
        /// Variable name.
        name: String,
        /// Raw query string without `?`; defaults to the ambient location's query.
        #[arg(long)]
        query: Option<String>,
    },

    /// Parse a URL (default: the ambient location) into path and query map.
    Deserialize {
        /// Full URL; defaults to the ambient location.
        url: Option<String>,
    },

    /// Rebuild a URL from a `{"path": ..., "query": {...}}` JSON document.
    Serialize {
        /// ParsedLocation as JSON.
        json: String,
    },

    /// Coerce cell texts into numbers, null or the text itself.
    Coerce {
        /// Cell texts (an empty string yields null).
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },

    /// Print a synthetic bubbling, cancelable event.
    Event {
        /// Event type.
        name: String,
    },

    /// Write values to the log at level log, warn or error.
    Log {
        /// Level tag; anything other than log/warn/error is ignored.
        level: String,
        /// Values; each is read as JSON when it parses, else as a string.
        values: Vec<String>,
    },

    /// Shallow-copy the properties of SOURCE onto TARGET (JSON objects).
    Mixin {
        /// Target object as JSON.
        target: String,
        /// Source object as JSON.
        source: String,
    },

    /// GET a URL and print the body on HTTP 200.
    Fetch {
        /// URL to request.
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    /// Commands that consult config.toml (ambient location or fetch settings).
    /// The rest never touch the config dir.
    pub fn reads_config(&self) -> bool {
        matches!(
            self,
            CliCommand::QueryVar { .. } | CliCommand::Deserialize { .. } | CliCommand::Fetch { .. }
        )
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = if cli.command.reads_config() {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            ReportalConfig::default()
        };

        let location_flag = cli.location.as_deref();
        match cli.command {
            CliCommand::QueryVar { name, query } => {
                let ambient = ambient::resolve(location_flag, &cfg)?;
                run_query_var(&name, query.as_deref(), &ambient)?
            }
            CliCommand::Deserialize { url } => {
                let ambient = ambient::resolve(location_flag, &cfg)?;
                run_deserialize(url.as_deref(), &ambient)?
            }
            CliCommand::Serialize { json } => run_serialize(&json)?,
            CliCommand::Coerce { values } => run_coerce(&values)?,
            CliCommand::Event { name } => run_event(&name)?,
            CliCommand::Log { level, values } => run_log(&level, &values),
            CliCommand::Mixin { target, source } => run_mixin(&target, &source)?,
            CliCommand::Fetch { url } => run_fetch(&url, &cfg.fetch).await?,
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "reportal", &mut std::io::stdout());
            }
            CliCommand::Man => {
                let man = clap_mangen::Man::new(Cli::command());
                man.render(&mut std::io::stdout())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
