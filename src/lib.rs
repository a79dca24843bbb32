pub mod cli;
pub mod config;
pub mod error;
pub mod guide;
pub mod lookup;
pub mod prompt;
