mod errors;
mod money;

pub use errors::MoneyError;
pub use money::{Money, DISPLAY_PLACES};

/// Monotonic counter bumped by every store mutation.
pub type Version = u64;
