//! A scanning session.
//!
//! The session owns the configuration and the diagnostic [`Handler`], runs
//! the scanner over a script or over prompt lines, and writes the results.

use std::io::{BufRead, Write};
use std::path::Path;

use loxc_util::{Handler, SourceFile};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DriverError, Result, EXIT_DATA_ERR};
use crate::output::{write_diagnostics, write_tokens};

/// Name used for prompt input in diagnostics.
pub const PROMPT_SOURCE_NAME: &str = "<prompt>";

/// Prompt printed before each line in interactive mode.
pub const PROMPT: &str = "> ";

/// Outcome of scanning one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No lexical errors.
    Clean,
    /// This many lexical errors were reported.
    LexicalErrors(usize),
}

impl RunStatus {
    /// Process exit status for a script run.
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::LexicalErrors(_) => EXIT_DATA_ERR,
        }
    }
}

/// Scanning session
pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    /// Creates a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// Reads and scans a script file.
    pub fn run_file(
        &self,
        path: &Path,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<RunStatus> {
        info!(path = %path.display(), "scanning script");
        let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        self.run_source(&path.display().to_string(), &source, out, err)
    }

    /// Scans `source`, printing tokens to `out` and diagnostics to `err`.
    ///
    /// Diagnostics from earlier runs are discarded first, so each call
    /// reports only its own errors.
    pub fn run_source(
        &self,
        name: &str,
        source: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<RunStatus> {
        self.handler.clear();

        let tokens = loxc_lex::scan(source, &self.handler);
        write_tokens(out, &tokens, self.config.format)?;

        let diagnostics = self.handler.take();
        let file = SourceFile::new(name, source);
        write_diagnostics(err, &file, &diagnostics, self.config.show_snippets)?;

        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        debug!(name, tokens = tokens.len(), errors, "run finished");

        Ok(if errors == 0 {
            RunStatus::Clean
        } else {
            RunStatus::LexicalErrors(errors)
        })
    }

    /// Interactive prompt.
    ///
    /// Each line is scanned on its own; lexical errors are printed and the
    /// prompt continues. Returns at end of input.
    pub fn run_prompt(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of prompt input");
                writeln!(out)?;
                return Ok(());
            }

            self.run_source(PROMPT_SOURCE_NAME, &line, out, err)?;
            err.flush()?;
        }
    }
}
