pub mod mover;
pub mod quote;
pub mod trigger;

pub use mover::{Mover, RankedMovers};
pub use quote::Quote;
pub use trigger::Trigger;
