//! CLI definition and dispatch.

use chrono::Duration;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::system_clock_adapter::SystemClockAdapter;
use crate::adapters::web::{AppState, build_router};
use crate::domain::catalog::StockCatalog;
use crate::domain::market::MarketFacade;
use crate::domain::metrics::DEFAULT_TRAILING_WINDOW_MS;
use crate::domain::security::StockClass;
use crate::ports::config_port::ConfigPort;

const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

#[derive(Parser, Debug)]
#[command(name = "gbce", about = "GBCE simple stock market service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the market HTTP server
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the seeded stock catalog
    Catalog,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve { config } => run_serve(config.as_ref()),
        Command::Catalog => run_catalog(),
    }
}

fn run_serve(config_path: Option<&PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match FileConfigAdapter::from_file(path) {
                Ok(c) => Some(c),
                Err(e) => {
                    eprintln!("error: failed to read config {}: {}", path.display(), e);
                    return ExitCode::from(2);
                }
            }
        }
        None => None,
    };

    let listen = config
        .as_ref()
        .and_then(|c| c.get_string("web", "listen"))
        .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
    let addr: SocketAddr = match listen.parse() {
        Ok(a) => a,
        Err(_) => {
            eprintln!("error: invalid listen address: {listen}");
            return ExitCode::from(2);
        }
    };

    let window_ms = config
        .as_ref()
        .map(|c| c.get_int("market", "trailing_window_ms", DEFAULT_TRAILING_WINDOW_MS))
        .unwrap_or(DEFAULT_TRAILING_WINDOW_MS);
    if window_ms <= 0 {
        eprintln!("error: trailing_window_ms must be positive, got {window_ms}");
        return ExitCode::from(2);
    }

    // Catalog and ledger are built before the listener binds; nothing is
    // lazily initialised once traffic arrives.
    let market = MarketFacade::new(StockCatalog::gbce(), Arc::new(SystemClockAdapter))
        .with_trailing_window(Duration::milliseconds(window_ms));

    eprintln!(
        "Starting market server on {addr} (trailing window {window_ms} ms)"
    );

    let router = build_router(AppState {
        market: Arc::new(market),
    });

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let served: std::io::Result<()> = runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await
    });

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: server failed: {e}");
            ExitCode::from(1)
        }
    }
}

fn run_catalog() -> ExitCode {
    let catalog = StockCatalog::gbce();
    let mut symbols = catalog.symbols();
    symbols.sort_unstable();

    println!("symbol  class      last_dividend  fixed_rate  par_value");
    for symbol in symbols {
        // symbols() only returns keys present in the catalog
        let Ok(sec) = catalog.lookup(symbol) else {
            continue;
        };
        let class = match sec.class {
            StockClass::Common => "Common",
            StockClass::Preferred => "Preferred",
        };
        let rate = sec
            .fixed_dividend_rate
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<7} {:<10} {:<14} {:<11} {}",
            sec.symbol, class, sec.last_dividend, rate, sec.par_value
        );
    }
    ExitCode::SUCCESS
}
