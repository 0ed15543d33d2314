//! Console logging as a deferred effect.
//!
//! [`log_io`] and [`log_io_to`] build an `IO<()>` that writes one line when
//! triggered. Lines go to a [`ConsoleSink`]: the process stdout in a host
//! build, a serial port on a board, or a [`MemoryConsole`] in tests.
//! Every write is mirrored as a `tracing` event with target
//! `funcy::console`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::effect::IO;

/// Destination for console lines.
pub trait ConsoleSink {
    /// Writes `line` followed by a line terminator.
    fn write_line(&self, line: &str);
}

/// Writes to the process stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Records lines in memory.
///
/// Clones share the same buffer, so one handle can be given to [`log_io_to`]
/// while another inspects what was written.
#[derive(Clone, Debug, Default)]
pub struct MemoryConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryConsole {
    /// Creates an empty console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Discards every recorded line.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Builds an `IO` that prints `message` to stdout each time it is
/// triggered.
///
/// # Examples
///
/// ```rust
/// use funcy::platform::log_io;
///
/// let greet = log_io("booting");
/// // nothing printed yet
/// greet.run_unsafe();
/// ```
pub fn log_io(message: impl Into<String>) -> IO<()> {
    log_io_to(StdoutConsole, message)
}

/// Builds an `IO` that writes `message` to `sink` each time it is
/// triggered.
///
/// # Examples
///
/// ```rust
/// use funcy::platform::{MemoryConsole, log_io_to};
///
/// let console = MemoryConsole::new();
/// let io = log_io_to(console.clone(), "sensor ready");
///
/// assert!(console.lines().is_empty());
/// io.run_unsafe();
/// io.run_unsafe();
/// assert_eq!(console.lines(), vec!["sensor ready", "sensor ready"]);
/// ```
pub fn log_io_to<S>(sink: S, message: impl Into<String>) -> IO<()>
where
    S: ConsoleSink + 'static,
{
    let message = message.into();
    IO::new(move || {
        tracing::info!(target: "funcy::console", message = %message);
        sink.write_line(&message);
    })
}
