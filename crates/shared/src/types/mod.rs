//! Common types used across the application.

pub mod id;
pub mod money;
pub mod percentage;

pub use id::*;
pub use money::Money;
pub use percentage::Percentage;
