//! Fontheader CLI library.

pub mod cli;
