//! Battle integration tests.

mod load;

#[cfg(feature = "http")]
mod http;
