//! Thin async client for the lingolift backend.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::BackendClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use model::{Inflection, Inflections, PartOfSpeechDescription};
