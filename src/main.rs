mod terminal;

use std::env;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use loan_engine::api::{AppState, CalculationResponse, create_router};
use loan_engine::calculator::Calculator;
use loan_engine::config::ConfigLoader;
use loan_engine::models::LoanForm;

use terminal::{TerminalChart, TerminalPanel};

const DEFAULT_CONFIG: &str = "config/loan-engine.yaml";

/// Loan amortization calculator
#[derive(Parser)]
#[command(
    name = "loan-engine",
    version,
    about = "Loan amortization calculator",
    long_about = "Computes the fixed monthly payment, total payment and total interest \
                  of a loan, its month-by-month amortization schedule, and a list of \
                  affiliated lenders. Runs once from the command line or as an HTTP API."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve,
    /// Calculate a single loan
    Calculate(CalculateArgs),
}

#[derive(Args)]
struct CalculateArgs {
    /// Loan amount; defaults to the last value used
    #[arg(long)]
    amount: Option<String>,
    /// Annual interest rate in percent; defaults to the last value used
    #[arg(long)]
    rate: Option<String>,
    /// Repayment period in years; defaults to the last value used
    #[arg(long)]
    years: Option<String>,
    /// ZIP code used for the lender lookup
    #[arg(long)]
    zip: Option<String>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("LOAN_ENGINE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigLoader, String> {
    match path {
        Some(path) => ConfigLoader::load(path).map_err(|e| e.to_string()),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            ConfigLoader::load(DEFAULT_CONFIG).map_err(|e| e.to_string())
        }
        None => {
            warn!(path = DEFAULT_CONFIG, "No configuration file, using defaults");
            Ok(ConfigLoader::default())
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn serve(loader: ConfigLoader) -> Result<(), String> {
    let bind = loader.config().server.bind.clone();
    let calculator = Calculator::from_config(&loader).map_err(|e| e.to_string())?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| format!("failed to bind {}: {}", bind, e))?;
    info!(bind = %bind, "Loan engine listening");

    axum::serve(listener, create_router(AppState::new(calculator)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())
}

async fn calculate(loader: ConfigLoader, args: CalculateArgs) -> Result<(), String> {
    let calculator = Calculator::from_config(&loader).map_err(|e| e.to_string())?;

    let previous = calculator.prefill().unwrap_or_else(|err| {
        warn!(error = %err, "Could not read previous inputs");
        LoanForm::default()
    });
    let form = LoanForm {
        loan_amount: args.amount.unwrap_or(previous.loan_amount),
        annual_interest: args.rate.unwrap_or(previous.annual_interest),
        repayment_period: args.years.unwrap_or(previous.repayment_period),
        zipcode: args.zip.unwrap_or(previous.zipcode),
    };

    let view = calculator.calculate(&form).await;

    if args.json {
        let response = CalculationResponse::from(view);
        let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        view.render(&mut TerminalPanel, &mut TerminalChart);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();
    let cli = Cli::parse();
    let loader = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(loader).await,
        Commands::Calculate(args) => calculate(loader, args).await,
    }
}
