use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SendMessageForm<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Deserialize, Getters)]
pub struct TelegramResponseDto {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}
