use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Quote {
    symbol: String,
    name: Option<String>,
    price: Option<Decimal>,
    previous_close: Option<Decimal>,
}
