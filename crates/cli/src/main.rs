use clap::{Parser, Subcommand, ValueEnum};
use ferrous_route_domain::{CliOverrides, ConnectionOutcome, DomainSetKind};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-route")]
#[command(version)]
#[command(about = "Ferrous Route - Learns which domains to reach directly and which through the proxy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory holding the domain list files
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how each host would be routed
    Check {
        #[arg(required = true, value_name = "HOST[:PORT]")]
        hosts: Vec<String>,

        /// One JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Record a connection outcome and save the learned lists
    Record {
        outcome: OutcomeArg,

        #[arg(required = true, value_name = "HOST[:PORT]")]
        hosts: Vec<String>,
    },

    /// Print a domain set, sorted
    List {
        /// blocked, direct, always-blocked or always-direct
        kind: DomainSetKind,
    },

    /// Run background maintenance until interrupted
    Run,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutcomeArg {
    /// The direct connection failed
    Blocked,
    /// The direct connection succeeded
    Direct,
}

impl From<OutcomeArg> for ConnectionOutcome {
    fn from(arg: OutcomeArg) -> Self {
        match arg {
            OutcomeArg::Blocked => ConnectionOutcome::Failed,
            OutcomeArg::Direct => ConnectionOutcome::Succeeded,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        data_dir: cli.data_dir.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %config.lists.dir,
        "Starting Ferrous Route"
    );

    let classifier = di::build_classifier(&config)?;
    let use_cases = di::UseCases::new(classifier.clone());

    match cli.command {
        Command::Check { hosts, json } => commands::check(&use_cases, &hosts, json),
        Command::Record { outcome, hosts } => {
            commands::record(&use_cases, &classifier, outcome.into(), &hosts)
        }
        Command::List { kind } => {
            commands::list(&use_cases, kind);
            Ok(())
        }
        Command::Run => commands::run(&config, Arc::clone(&classifier)).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_record_with_global_flags() {
        let cli = Cli::try_parse_from([
            "ferrous-route",
            "record",
            "blocked",
            "evil.com:443",
            "--data-dir",
            "/tmp/lists",
        ])
        .unwrap();

        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/lists"));
        match cli.command {
            Command::Record { outcome, hosts } => {
                assert_eq!(ConnectionOutcome::from(outcome), ConnectionOutcome::Failed);
                assert_eq!(hosts, vec!["evil.com:443"]);
            }
            _ => panic!("expected record"),
        }
    }

    #[test]
    fn test_parse_list_kind() {
        let cli = Cli::try_parse_from(["ferrous-route", "list", "always-direct"]).unwrap();

        assert!(matches!(
            cli.command,
            Command::List {
                kind: DomainSetKind::AlwaysDirect
            }
        ));
    }

    #[test]
    fn test_check_requires_a_host() {
        assert!(Cli::try_parse_from(["ferrous-route", "check"]).is_err());
    }
}
