use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::codec::Format;
use crate::FORMAT_ENV;

#[derive(Debug, Parser)]
#[command(name = "pout", version, about = "Produce and inspect name/answer output records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build an output record and print it
    New {
        /// Question name; absent when omitted
        #[arg(long)]
        name: Option<String>,
        /// Answer payload; absent when omitted
        #[arg(long)]
        answer: Option<String>,
        #[arg(long, value_enum, env = FORMAT_ENV, default_value_t = Format::Json)]
        format: Format,
    },
    /// Re-encode a document of outputs in another format
    Convert {
        /// Input file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
        #[arg(long, value_enum, env = FORMAT_ENV, default_value_t = Format::Json)]
        from: Format,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        to: Format,
    },
    /// Show every output in a document
    Show {
        file: Option<PathBuf>,
        #[arg(long, value_enum, env = FORMAT_ENV, default_value_t = Format::Json)]
        from: Format,
        #[arg(long)]
        json: bool,
    },
    /// Print the answer recorded for a name
    Get {
        name: String,
        file: Option<PathBuf>,
        #[arg(long, value_enum, env = FORMAT_ENV, default_value_t = Format::Json)]
        from: Format,
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new() {
        let cli = Cli::try_parse_from([
            "pout", "new", "--name", "q1", "--answer", "yes", "--format", "toml",
        ])
        .unwrap();
        match cli.command {
            Commands::New {
                name,
                answer,
                format,
            } => {
                assert_eq!(name.as_deref(), Some("q1"));
                assert_eq!(answer.as_deref(), Some("yes"));
                assert_eq!(format, Format::Toml);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_new_with_absent_name() {
        let cli = Cli::try_parse_from(["pout", "new", "--answer", "yes"]).unwrap();
        match cli.command {
            Commands::New { name, answer, .. } => {
                assert_eq!(name, None);
                assert_eq!(answer.as_deref(), Some("yes"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_stray_positionals() {
        assert!(Cli::try_parse_from(["pout", "new", "q1", "yes"]).is_err());
        assert!(Cli::try_parse_from(["pout", "new", "--no-name", "q1", "yes"]).is_err());
    }

    #[test]
    fn test_parse_convert() {
        let cli =
            Cli::try_parse_from(["pout", "convert", "answers.jsonl", "--from", "jsonl", "--to", "toml"])
                .unwrap();
        match cli.command {
            Commands::Convert { file, from, to } => {
                assert_eq!(file, Some(PathBuf::from("answers.jsonl")));
                assert_eq!(from, Format::Jsonl);
                assert_eq!(to, Format::Toml);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pout", "show", "--from", "yaml"]).is_err());
    }
}
