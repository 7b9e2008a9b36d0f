mod errors;
mod store_actor;
#[cfg(test)]
mod tests;

pub use errors::StoreError;
pub use store_actor::{StoreActor, StoreHandle};
