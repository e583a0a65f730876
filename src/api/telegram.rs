use anyhow::{Error, Result};
use reqwest::Client;
use tracing::debug;

use super::telegram_dto::{SendMessageForm, TelegramResponseDto};

pub const BASE_URL: &str = "https://api.telegram.org";

#[derive(Clone, Debug)]
pub struct TelegramApi {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramApi {
    pub fn new(client: Client, base_url: &str, bot_token: &str, chat_id: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let form = SendMessageForm {
            chat_id: &self.chat_id,
            text,
        };

        let res = self.client.post(&url).form(&form).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::msg(format!(
                "Telegram request failed with status {}: {}",
                status, body
            )));
        }

        // Telegram reports some failures with a 200 and "ok": false.
        if let Ok(response) = serde_json::from_str::<TelegramResponseDto>(&body) {
            if !*response.ok() {
                return Err(Error::msg(format!(
                    "Telegram rejected message: {}",
                    response.description().as_deref().unwrap_or("no description")
                )));
            }
        }

        debug!(chars = text.chars().count(), "Sent Telegram message");
        Ok(())
    }
}
