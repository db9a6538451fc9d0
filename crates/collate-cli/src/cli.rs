use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "collate",
    about = "Collate: token-level diffs of variant editions against a base edition",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./collate.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff every source table under a path and write JSON results
    Run(RunArgs),
    /// Diff two pieces of text against each other
    Diff(DiffArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// A source table or a directory of them
    pub input: PathBuf,
    /// Output root (overrides the configuration)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Maximum chapters processed at once
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct DiffArgs {
    pub base: String,
    pub variant: String,
    /// Keep spaces as tokens
    #[arg(long)]
    pub whitespace: bool,
}

#[derive(Args)]
pub struct ConfigArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run() {
        let cli = Cli::try_parse_from(["collate", "run", "scripture"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("scripture"));
            assert!(args.out.is_none());
            assert!(args.jobs.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_run_with_overrides() {
        let cli = Cli::try_parse_from(["collate", "run", "in", "-o", "out", "-j", "3"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.out, Some(PathBuf::from("out")));
            assert_eq!(args.jobs, Some(3));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["collate", "diff", "the dog ran", "the cat ran"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.base, "the dog ran");
            assert_eq!(args.variant, "the cat ran");
            assert!(!args.whitespace);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["collate", "--config", "c.toml", "config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::Config(_)));
    }

    #[test]
    fn parse_verbose_json() {
        let cli = Cli::try_parse_from(["collate", "-v", "--format", "json", "config"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn diff_requires_two_texts() {
        assert!(Cli::try_parse_from(["collate", "diff", "only one"]).is_err());
    }
}
