//! Terminal and JSON presentation for the CLI

pub mod diff;
pub mod error;
pub mod json;
pub mod output;
