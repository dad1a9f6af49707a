//! Browser-side contact form behavior: field state, a single-flight submit
//! and the toast that reports the outcome.

mod api;
mod controller;
mod form;
mod toast;

pub use api::*;
pub use controller::*;
pub use form::*;
pub use toast::*;
