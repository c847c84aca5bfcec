pub mod cli;
pub mod codec;
pub mod commands;
pub mod helpers;
pub mod models;
pub mod output;

use anyhow::Result;

use cli::{Cli, Commands};

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "PACO_LOG";
/// Environment variable overriding the default document format.
pub const FORMAT_ENV: &str = "PACO_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New {
            name,
            answer,
            format,
        } => {
            let created = commands::new::run(name, answer);
            output::output_created(&created, format)
        }
        Commands::Convert { file, from, to } => {
            let outputs = commands::show::run(file.as_deref(), from)?;
            output::converted(&outputs, to)
        }
        Commands::Show { file, from, json } => {
            let outputs = commands::show::run(file.as_deref(), from)?;
            output::output_list(&outputs, json)
        }
        Commands::Get {
            name,
            file,
            from,
            json,
        } => {
            let outputs = commands::show::run(file.as_deref(), from)?;
            let found = commands::get::run(&name, &outputs)?;
            output::answer(&found, json)
        }
    }
}
