pub mod client;
pub mod error;

pub use client::StoreClient;
pub use error::StoreError;
