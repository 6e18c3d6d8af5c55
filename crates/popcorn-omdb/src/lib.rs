pub mod api;
pub mod client;
pub mod error;

pub use client::{OmdbClient, SearchOutcome};
pub use error::OmdbError;
