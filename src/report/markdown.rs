//! Markdown file reporter
//!
//! Writes each report line to an operator-visible channel (stdout) and
//! appends it to a markdown log file, mirroring the two-channel record the
//! walk produces as its artifact.

use crate::report::traits::{Reporter, ReportResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Reporter that echoes lines to stdout and persists them to a markdown file
pub struct MarkdownReporter {
    writer: BufWriter<File>,
    echo: bool,
}

impl MarkdownReporter {
    /// Creates the log file at `path`, truncating any existing content
    pub fn create(path: &Path) -> ReportResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            echo: true,
        })
    }

    /// Like [`MarkdownReporter::create`], but without the stdout echo
    pub fn create_quiet(path: &Path) -> ReportResult<Self> {
        let mut reporter = Self::create(path)?;
        reporter.echo = false;
        Ok(reporter)
    }
}

impl Reporter for MarkdownReporter {
    fn report(&mut self, line: &str) -> ReportResult<()> {
        if self.echo {
            println!("{}", line);
        }
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn finalize(&mut self) -> ReportResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
