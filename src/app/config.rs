use std::{env, net::SocketAddr, time::Duration};

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use tracing::warn;

use crate::api::{fmp, telegram};

pub const SP500_SYMBOLS: [&str; 49] = [
    "AAPL", "MSFT", "AMZN", "GOOGL", "META", "TSLA", "NVDA", "BRK.B", "JPM", "JNJ", "V", "PG",
    "XOM", "UNH", "MA", "HD", "CVX", "ABBV", "LLY", "PEP", "KO", "MRK", "AVGO", "BAC", "TMO",
    "DIS", "PFE", "CSCO", "ADBE", "WMT", "CRM", "CMCSA", "ABT", "MCD", "NFLX", "ACN", "DHR",
    "NKE", "INTC", "COST", "VZ", "TXN", "NEE", "LIN", "BMY", "MDT", "UNP", "HON", "AMGN",
];

const DEFAULT_FMP_API_KEY: &str = "demo";
const DEFAULT_KEEP_ALIVE_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    symbols: Vec<String>,
    bot_token: String,
    chat_id: String,
    fmp_api_key: String,
    fmp_base_url: String,
    telegram_base_url: String,
    keep_alive_addr: SocketAddr,
    poll_interval: Duration,
}

impl Config {
    /// Reads settings from the environment, after loading a `.env` file if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let bot_token = credential("BOT_TOKEN");
        let chat_id = credential("CHAT_ID");

        let keep_alive_addr = var_or("KEEP_ALIVE_ADDR", DEFAULT_KEEP_ALIVE_ADDR)
            .parse::<SocketAddr>()
            .context("Failed to parse KEEP_ALIVE_ADDR")?;

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .with_context(|| format!("Failed to parse POLL_INTERVAL_SECS '{}'", value))?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self::new(
            default_symbols(),
            bot_token,
            chat_id,
            var_or("FMP_API_KEY", DEFAULT_FMP_API_KEY),
            var_or("FMP_BASE_URL", fmp::BASE_URL),
            var_or("TELEGRAM_BASE_URL", telegram::BASE_URL),
            keep_alive_addr,
            Duration::from_secs(poll_interval_secs.max(1)),
        ))
    }
}

pub fn default_symbols() -> Vec<String> {
    SP500_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Missing credentials do not stop the process; sends fail and are logged instead.
pub fn credential(key: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            warn!("Missing {} in environment, Telegram messages will fail", key);
            String::new()
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
