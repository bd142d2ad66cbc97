//! Review API module for HTTP communication

mod client;
mod traits;
mod wire;

pub use client::ReviewClient;
pub use traits::ReviewApi;

#[cfg(test)]
pub use traits::MockReviewApi;
