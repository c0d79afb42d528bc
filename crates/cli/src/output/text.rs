//! Text output formatter.
//!
//! Prints failed and errored outcomes (capped for console readability) and
//! a summary line. Passing outcomes are silent.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::CONSOLE_ROW_LIMIT;
use crate::checks::Severity;
use crate::report::{OutcomeKind, Report};

/// Text output formatter with color support.
pub struct TextFormatter {
    stdout: StandardStream,
}

impl TextFormatter {
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    /// Write the failure rows and summary for a finished report.
    pub fn write_report(&mut self, report: &Report) -> std::io::Result<()> {
        let problems: Vec<_> = report.problems().collect();

        for outcome in problems.iter().take(CONSOLE_ROW_LIMIT) {
            self.stdout.set_color(&bold())?;
            write!(self.stdout, "{}", outcome.run_id)?;
            self.stdout.reset()?;
            write!(self.stdout, ": ")?;

            let (label, spec) = match (&outcome.kind, outcome.severity) {
                (OutcomeKind::Error(_), _) => ("ERROR", colored(Color::Red)),
                (_, Severity::Error) => ("FAIL", colored(Color::Red)),
                (_, Severity::Warn) => ("WARN", colored(Color::Yellow)),
            };
            self.stdout.set_color(&spec)?;
            write!(self.stdout, "{label}")?;
            self.stdout.reset()?;
            writeln!(self.stdout)?;

            if let Some(message) = outcome.kind.message() {
                writeln!(self.stdout, "  {message}")?;
            }
        }

        if problems.len() > CONSOLE_ROW_LIMIT {
            writeln!(
                self.stdout,
                "... and {} more, re-run with `--output-file` to see the full list",
                problems.len() - CONSOLE_ROW_LIMIT
            )?;
        }

        self.write_summary(report)
    }

    fn write_summary(&mut self, report: &Report) -> std::io::Result<()> {
        let s = report.summary;
        writeln!(
            self.stdout,
            "{} check{} run: {} passed, {} failed ({} error, {} warn), {} errored",
            s.total,
            if s.total == 1 { "" } else { "s" },
            s.passed,
            s.failed_error + s.failed_warn,
            s.failed_error,
            s.failed_warn,
            s.errored
        )
    }
}

fn bold() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    spec
}

fn colored(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}
