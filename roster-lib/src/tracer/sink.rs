use std::cell::RefCell;
use std::fmt;
use super::{entry_line, exit_line};

/// Receiver for traced call events
pub trait TraceSink {
    /// Called before the wrapped function runs
    fn entered(&self, name: &str);

    /// Called after the wrapped function returned `value`
    fn returned(&self, name: &str, value: &dyn fmt::Display);
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn entered(&self, name: &str) {
        (**self).entered(name);
    }

    fn returned(&self, name: &str, value: &dyn fmt::Display) {
        (**self).returned(name, value);
    }
}

/// Keeps trace lines in memory, in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Snapshot of the lines recorded so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl TraceSink for MemorySink {
    fn entered(&self, name: &str) {
        self.lines.borrow_mut().push(entry_line(name));
    }

    fn returned(&self, name: &str, value: &dyn fmt::Display) {
        self.lines.borrow_mut().push(exit_line(name, value));
    }
}
