use std::io;

use clap::{Parser, Subcommand};

use tallybook_console::{Console, ConsoleConfig, LibrarySession, StockPriceSession};
use tallybook_observability::LogFormat;

#[derive(Parser)]
#[command(name = "tallybook")]
#[command(about = "Console tools: stock-price statistics and a library catalog")]
struct Cli {
    /// Log line format on stderr (compact or json); level via RUST_LOG
    #[arg(long, global = true, default_value = "compact")]
    log_format: LogFormat,

    /// Width of the divider lines drawn around menus and results
    /// [default: 40 for stocks, 54 for library]
    #[arg(long, global = true)]
    divider_width: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average, maximum, occurrence count and cumulative sum of price series
    Stocks,
    /// Add, borrow and return books in an in-memory catalog
    Library,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tallybook_observability::init(cli.log_format);

    let mut config = match cli.command {
        Commands::Stocks => ConsoleConfig::default(),
        Commands::Library => ConsoleConfig::for_library(),
    };
    if let Some(width) = cli.divider_width {
        config = config.with_divider_width(width);
    }
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config);

    match cli.command {
        Commands::Stocks => {
            tracing::info!("starting stock price session");
            StockPriceSession::new(console).run()?;
        }
        Commands::Library => {
            tracing::info!("starting library session");
            LibrarySession::new(console).run()?;
        }
    }

    Ok(())
}
