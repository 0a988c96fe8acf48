//! Console front end for the Command Manager message parser.
//!
//! Runs a short demo script, then decodes messages typed on stdin (or read
//! from a script file) until the exit keyword. Decoded output goes to stdout;
//! logs go to stderr and, optionally, a JSONL file.

pub mod config;
pub mod console;
pub mod demo;
pub mod error;

pub use config::Config;
pub use console::{Console, SessionStats};
pub use error::{ConsoleError, ConsoleResult};
