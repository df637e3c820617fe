// NOTE: Pipeline
//
// locate lead log -> discover teammates -> parse each log -> merge timelines
// -> assemble document -> (view) render into the HTML template / (export) JSON
//
// Every run reads closed log files and writes at most one output file, so
// there is no index or cache: the logs are the source of truth.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod session_loader;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
