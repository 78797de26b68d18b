//! Sentimento: a small desktop client for a local sentiment-classification
//! service. The GUI collects a comment, POSTs it to the service and shows
//! the returned label with a matching color and glyph.

pub mod client;
pub mod config;
