pub mod client;
pub mod pacing;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::PlatformClient;
pub use pacing::{DelayRange, PacingConfig};
pub use types::{Media, MediaInfo, SessionSettings, UserId, UserShort};
