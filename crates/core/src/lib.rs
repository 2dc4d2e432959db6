//! Fontheader Core - fetch-and-convert pipeline for the generated font header.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{FONTS, FontSpec};
pub use error::{Error, Result};
pub use pipeline::{
    Converter, Fetcher, FontconvertTool, GenerateContext, GenerateSummary, HttpFetcher, clean,
    generate,
};

#[cfg(test)]
pub(crate) mod testutil;
