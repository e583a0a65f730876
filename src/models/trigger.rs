use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum Trigger {
    #[strum(to_string = "market open")]
    MarketOpen,
    #[strum(to_string = "market close")]
    MarketClose,
}

impl Trigger {
    pub fn notice(&self) -> &'static str {
        match self {
            Trigger::MarketOpen => "🟢 Market Open!",
            Trigger::MarketClose => "🔴 Market Close!",
        }
    }
}
