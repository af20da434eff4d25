//! Output management and formatting.
//!
//! Service outcomes are written either as the `{ "value", "errors" }`
//! envelope (`--output-format json`) or as a status line followed by the
//! pretty-printed value.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;
use timetable_core::application::{Response, ServiceResult};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins unless left on auto, then the configured format.
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_config(&config.output.format).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Service outcomes ──────────────────────────────────────────────────

    /// Write a service outcome and hand failures back for the exit code.
    ///
    /// JSON mode always writes the envelope, even with `--quiet`, so that
    /// scripts can parse stdout.
    pub fn emit<T: Serialize>(&self, result: ServiceResult<T>, summary: &str) -> CliResult<()> {
        match result {
            Ok(value) => self.value(&value, summary),
            Err(err) => {
                if self.resolved_format == OutputFormat::Json {
                    self.envelope(&Response::<T>::from(Err(err.clone())))?;
                }
                Err(err.into())
            }
        }
    }

    /// Write a successful value.
    pub fn value<T: Serialize>(&self, value: &T, summary: &str) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.envelope(&Response::Success(value));
        }
        if self.quiet {
            return Ok(());
        }
        self.success(summary)?;
        let pretty = serde_json::to_string_pretty(value).map_err(CliError::Render)?;
        self.print(&pretty)?;
        Ok(())
    }

    fn envelope<T: Serialize>(&self, response: &Response<T>) -> CliResult<()> {
        let json = serde_json::to_string(response).map_err(CliError::Render)?;
        self.term.write_line(&json)?;
        Ok(())
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
