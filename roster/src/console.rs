use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use roster_lib::tracer::sink::TraceSink;
use roster_lib::tracer::{entry_line, exit_line};

/// Line-oriented output shared by the driver and traced calls.
///
/// Trace events cannot return errors, so the first failed trace write is
/// kept and reported by [`Console::finish`].
pub struct Console<W: Write> {
    out: RefCell<W>,
    failed: RefCell<Option<io::Error>>,
}

impl<W: Write> Console<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Console {
            out: RefCell::new(out),
            failed: RefCell::new(None),
        }
    }

    /// Write one line
    ///
    /// # Errors
    ///
    /// Returns the underlying writer's error.
    pub fn line(&self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "{text}")
    }

    /// Write an empty line
    ///
    /// # Errors
    ///
    /// Returns the underlying writer's error.
    pub fn blank(&self) -> io::Result<()> {
        writeln!(self.out.borrow_mut())
    }

    /// Flush and hand back the writer
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing trace lines, or the error
    /// from flushing.
    pub fn finish(self) -> io::Result<W> {
        if let Some(err) = self.failed.into_inner() {
            return Err(err);
        }
        let mut out = self.out.into_inner();
        out.flush()?;
        Ok(out)
    }

    fn keep_first_error(&self, result: io::Result<()>) {
        if let Err(err) = result {
            let mut failed = self.failed.borrow_mut();
            if failed.is_none() {
                *failed = Some(err);
            }
        }
    }
}

impl<W: Write> TraceSink for Console<W> {
    fn entered(&self, name: &str) {
        self.keep_first_error(self.line(entry_line(name)));
    }

    fn returned(&self, name: &str, value: &dyn fmt::Display) {
        self.keep_first_error(self.line(exit_line(name, value)));
    }
}
