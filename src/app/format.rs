use rust_decimal::RoundingStrategy;

use crate::models::Mover;

pub const GAINERS_TITLE: &str = "Top 5 Gainers";
pub const GAINERS_EMOJI: &str = "📈";
pub const LOSERS_TITLE: &str = "Top 5 Losers";
pub const LOSERS_EMOJI: &str = "📉";
pub const FETCH_FAILED_NOTICE: &str = "⚠️ Failed to load stock data.";

pub fn format_movers_message(title: &str, movers: &[Mover], emoji: &str) -> String {
    let mut message = format!("{} {}\n", emoji, title);
    for mover in movers {
        let mut change = mover
            .change_percent()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        // A change that rounds to zero prints as 0.00, without a sign.
        change.rescale(2);
        message.push_str(&format!(
            "{} ({}): {}%\n",
            mover.symbol(),
            mover.name(),
            change
        ));
    }
    message
}
