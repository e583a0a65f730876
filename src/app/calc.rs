use rust_decimal::Decimal;

use crate::models::{Mover, Quote, RankedMovers};

pub const TOP_N: usize = 5;

/// Percentage change from `previous_close` to `price`. Zero when either side is
/// missing or zero, or when the arithmetic overflows.
pub fn change_percent(price: Option<Decimal>, previous_close: Option<Decimal>) -> Decimal {
    match (price, previous_close) {
        (Some(price), Some(previous_close))
            if !price.is_zero() && !previous_close.is_zero() =>
        {
            price
                .checked_sub(previous_close)
                .and_then(|change| change.checked_div(previous_close))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

pub fn to_movers(quotes: Vec<Quote>) -> Vec<Mover> {
    quotes
        .into_iter()
        .map(|quote| {
            let change = change_percent(*quote.price(), *quote.previous_close());
            Mover::new(quote, change)
        })
        .collect()
}

/// Ranks quotes by percentage change. Gainers are the first [`TOP_N`] of the descending
/// order and losers the last [`TOP_N`], so the two overlap when fewer than
/// `2 * TOP_N` quotes are given.
pub fn top_movers(quotes: Vec<Quote>) -> RankedMovers {
    let mut movers = to_movers(quotes);
    movers.sort_by(|a, b| b.change_percent().cmp(a.change_percent()));

    let gainers = movers.iter().take(TOP_N).cloned().collect();
    let losers = movers[movers.len().saturating_sub(TOP_N)..].to_vec();

    RankedMovers::new(gainers, losers)
}
