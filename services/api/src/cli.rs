use crate::check::{run_check, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pay_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Payment Match",
    about = "Validate invoices against purchase orders and receipt acknowledgments before payment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate three extracted documents from JSON files and print the verdict
    Validate(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_check(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["pay-match-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn validate_takes_three_document_paths() {
        let cli = Cli::try_parse_from([
            "pay-match-api",
            "validate",
            "--invoice",
            "invoice.json",
            "--order",
            "order.json",
            "--receipt",
            "receipt.json",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Validate(args)) => {
                assert_eq!(args.invoice.to_str(), Some("invoice.json"));
                assert_eq!(args.order.to_str(), Some("order.json"));
                assert_eq!(args.receipt.to_str(), Some("receipt.json"));
                assert!(args.json);
            }
            other => panic!("expected validate command, got {other:?}"),
        }
    }

    #[test]
    fn validate_requires_every_document() {
        let err = Cli::try_parse_from(["pay-match-api", "validate", "--invoice", "invoice.json"]);
        assert!(err.is_err());
    }
}
