//! loxc-drv - Scanner Driver
//!
//! Runs the Lox scanner over a script file or an interactive prompt and
//! prints the token stream. Lexical errors are printed as diagnostics and
//! turned into the process exit status by the `loxc` binary.

pub mod config;
pub mod error;
pub mod output;
pub mod session;

pub use config::{Config, OutputFormat, CONFIG_FILE_NAME};
pub use error::{
    DriverError, Result, EXIT_CONFIG, EXIT_DATA_ERR, EXIT_IO_ERR, EXIT_SOFTWARE, EXIT_USAGE,
};
pub use session::{RunStatus, Session};
