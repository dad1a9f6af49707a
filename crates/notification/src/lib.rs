mod contact;
mod service;
mod transport;

pub use contact::*;
pub use service::*;
pub use transport::*;
