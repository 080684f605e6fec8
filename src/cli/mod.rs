//! CLI module for the user registry
//!
//! Provides the `serve` subcommand, which runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// User Registry - username/password registration service
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "user-registry",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["user-registry", "serve"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["user-registry"]).is_err());
    }
}
