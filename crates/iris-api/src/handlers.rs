//! HTTP request handlers.

pub mod health;
pub mod info;
pub mod predict;

pub use health::health;
pub use info::{model_info, root};
pub use predict::predict;
