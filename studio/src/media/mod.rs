//! Bindings to the media protocol client.

#[cfg(feature = "csr")]
pub mod hls;
