use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

use super::{
    fmp_dto::FmpQuoteDto,
    utils::{make_request, parse_response_array},
};
use crate::models::Quote;

pub const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
pub const BATCH_SIZE: usize = 100;

#[derive(Clone, Debug)]
pub struct FmpApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FmpApi {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn get_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>> {
        let endpoint = format!("quote/{}", symbols.join(","));
        let res = make_request(&self.client, &self.base_url, &endpoint, &self.api_key)
            .await
            .with_context(|| format!("FMP ({})", symbols.join(",")))?;

        let quotes = parse_response_array::<FmpQuoteDto>(res)
            .with_context(|| format!("FMP ({}): Failed to parse quotes", symbols.join(",")))?;

        Ok(quotes.iter().map(FmpQuoteDto::to_quote).collect())
    }

    /// Fetches quotes in chunks of [`BATCH_SIZE`] symbols. A chunk that fails is
    /// skipped, so the result only holds quotes from the chunks that succeeded.
    pub async fn get_batch_quotes(&self, symbols: &[String]) -> Vec<Quote> {
        let mut quotes = Vec::new();

        for (batch_idx, batch) in symbols.chunks(BATCH_SIZE).enumerate() {
            match self.get_quotes(batch).await {
                Ok(batch_quotes) => {
                    debug!(
                        batch = batch_idx,
                        requested = batch.len(),
                        received = batch_quotes.len(),
                        "Fetched quote batch"
                    );
                    quotes.extend(batch_quotes);
                }
                Err(err) => {
                    warn!(batch = batch_idx, "Skipping quote batch: {:#}", err);
                }
            }
        }

        quotes
    }
}
