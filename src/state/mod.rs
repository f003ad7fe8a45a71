//! State Management
//!
//! Observable app store and the subscription primitive behind it.

pub mod store;
pub mod subscription;

pub use store::{AppState, Store};
pub use subscription::Subscription;
