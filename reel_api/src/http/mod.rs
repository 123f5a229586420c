#[cfg(feature = "client")]
mod api;
mod types;

#[cfg(feature = "client")]
pub use api::*;
pub use types::*;
