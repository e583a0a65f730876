pub mod fmp;
pub mod fmp_dto;
pub mod telegram;
pub mod telegram_dto;
pub mod utils;

pub use fmp::FmpApi;
pub use telegram::TelegramApi;
