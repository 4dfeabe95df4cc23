//! Deck Prices - prices an MTG deck list with Scryfall
//!
//! Prints one line per card and a total. Search responses are cached by
//! query so re-running the same deck does not hit the API again.

use clap::Parser;
use deck_prices::config::{default_cache_dir, SCRYFALL_API_URL};
use deck_prices::{format_report, price_deck_file, Config, ResponseCache};
use std::path::PathBuf;
use std::time::Duration;

/// Price an MTG deck list using Scryfall USD prices
#[derive(Parser, Debug)]
#[command(name = "deck_prices")]
#[command(version, about, long_about = None)]
struct Args {
    /// Deck list, one `<quantity> <card name>` per line
    #[arg(required_unless_present = "clear_cache")]
    deck_file: Option<PathBuf>,

    /// Directory for cached search responses
    #[arg(long, default_value_os_t = default_cache_dir())]
    cache_dir: PathBuf,

    /// Scryfall API base URL
    #[arg(long, default_value = SCRYFALL_API_URL)]
    api_url: String,

    /// Abort the price request after this many seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Delete all cached search responses and exit
    #[arg(long, default_value_t = false)]
    clear_cache: bool,
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            // Usage errors exit with 1, not clap's default of 2
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=debug, RUST_LOG=deck_prices=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    let config = Config {
        api_base_url: args.api_url,
        cache_dir: args.cache_dir,
        timeout: args.timeout_secs.map(Duration::from_secs),
        ..Config::default()
    };

    if args.clear_cache {
        match ResponseCache::new(config.cache_dir.clone()).clear() {
            Ok(removed) => println!("Removed {removed} cached responses"),
            Err(e) => {
                log::error!("Failed to clear cache: {e}");
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code());
            }
        }
        return;
    }

    let Some(deck_file) = args.deck_file else {
        // clap enforces the deck file unless --clear-cache was given
        std::process::exit(1);
    };

    log::info!("Cache directory: {}", config.cache_dir.display());

    match price_deck_file(&deck_file, &config) {
        Ok(deck) => print!("{}", format_report(&deck)),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
