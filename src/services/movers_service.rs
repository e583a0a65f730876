use anyhow::{Error, Result};
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    api::{FmpApi, TelegramApi},
    app::{
        Config, calc,
        format::{self, format_movers_message},
    },
    models::Trigger,
};

/// Runs the market open/close pipeline: notice, batched fetch, ranking and the two
/// mover messages.
#[derive(Clone, Debug)]
pub struct MoversService {
    fmp: FmpApi,
    telegram: TelegramApi,
    symbols: Vec<String>,
}

impl MoversService {
    pub fn new(config: &Config) -> Self {
        let client = Client::new();
        Self {
            fmp: FmpApi::new(
                client.clone(),
                config.fmp_base_url(),
                config.fmp_api_key(),
            ),
            telegram: TelegramApi::new(
                client,
                config.telegram_base_url(),
                config.bot_token(),
                config.chat_id(),
            ),
            symbols: config.symbols().clone(),
        }
    }

    pub async fn run(&self, trigger: Trigger) -> Result<()> {
        info!(%trigger, "Running scheduled trigger");
        match trigger {
            Trigger::MarketOpen => self.send_market_open_message().await,
            Trigger::MarketClose => self.send_market_close_message().await,
        }
    }

    pub async fn send_market_open_message(&self) -> Result<()> {
        self.send_notice_and_movers(Trigger::MarketOpen).await
    }

    pub async fn send_market_close_message(&self) -> Result<()> {
        self.send_notice_and_movers(Trigger::MarketClose).await
    }

    async fn send_notice_and_movers(&self, trigger: Trigger) -> Result<()> {
        let notice_sent = self.notify(trigger.notice()).await;
        let movers = self.send_sp500_top_movers().await;

        match (notice_sent, movers) {
            (true, result) => result,
            (false, Ok(())) => Err(Error::msg(format!("Failed to send {} notice", trigger))),
            (false, Err(err)) => Err(err.context(format!("Failed to send {} notice", trigger))),
        }
    }

    /// Sends the gainers and losers messages, or a single failure notice when no
    /// quotes could be fetched.
    pub async fn send_sp500_top_movers(&self) -> Result<()> {
        let quotes = self.fmp.get_batch_quotes(&self.symbols).await;

        if quotes.is_empty() {
            warn!(symbols = self.symbols.len(), "No quotes received");
            return if self.notify(format::FETCH_FAILED_NOTICE).await {
                Ok(())
            } else {
                Err(Error::msg("Failed to send stock data failure notice"))
            };
        }

        info!(
            requested = self.symbols.len(),
            received = quotes.len(),
            "Ranking movers"
        );
        let ranked = calc::top_movers(quotes);

        let gainers_message = format_movers_message(
            format::GAINERS_TITLE,
            ranked.gainers(),
            format::GAINERS_EMOJI,
        );
        let losers_message =
            format_movers_message(format::LOSERS_TITLE, ranked.losers(), format::LOSERS_EMOJI);

        let mut failed = 0;
        for message in [gainers_message, losers_message] {
            if !self.notify(&message).await {
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(Error::msg(format!(
                "Failed to send {} of 2 mover messages",
                failed
            )));
        }

        Ok(())
    }

    async fn notify(&self, text: &str) -> bool {
        match self.telegram.send_message(text).await {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to send Telegram message: {:#}", err);
                false
            }
        }
    }
}
