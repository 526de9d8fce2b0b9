mod document;
mod error;
mod request;

#[cfg(test)]
mod tests;

pub use document::{Document, FromDocument};
pub use error::DecodeError;
pub use request::BalanceRequest;
