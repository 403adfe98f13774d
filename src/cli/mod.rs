//! CLI module for the national team service

pub mod serve;

use clap::{Parser, Subcommand};

/// National team service - create, read and delete national teams
#[derive(Parser)]
#[command(name = "nationalteam-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["nationalteam-service", "serve"]).unwrap();
        let Command::Serve(args) = cli.command;
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli =
            Cli::try_parse_from(["nationalteam-service", "serve", "--port", "9004"]).unwrap();
        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9004));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["nationalteam-service"]).is_err());
    }
}
