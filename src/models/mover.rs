use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Quote;

/// A quote annotated with its percentage change against the previous close.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Mover {
    quote: Quote,
    change_percent: Decimal,
}

impl Mover {
    pub fn symbol(&self) -> &str {
        self.quote.symbol()
    }

    pub fn name(&self) -> &str {
        self.quote.name().as_deref().unwrap_or("N/A")
    }
}

#[derive(Clone, Debug, Getters, new)]
pub struct RankedMovers {
    gainers: Vec<Mover>,
    losers: Vec<Mover>,
}
