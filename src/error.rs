use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::progname::program_name;

/// A user-facing error that ends the process once reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError {
    pub program: String,
    pub message: String,
}

impl FatalError {
    pub const EXIT_STATUS: i32 = 1;

    pub fn new(script: impl AsRef<Path>, message: impl Into<String>) -> Self {
        FatalError {
            program: program_name(script),
            message: message.into(),
        }
    }

    /// Writes `"<program>: error: <message>\n"` to `out`.
    ///
    /// # Errors
    /// Returns an error if writing to or flushing `out` fails.
    pub fn report_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")?;
        out.flush()
    }

    /// Prints the error to stderr and exits with [`FatalError::EXIT_STATUS`].
    pub fn exit(self) -> ! {
        let _ = self.report_to(&mut io::stderr().lock());
        std::process::exit(Self::EXIT_STATUS)
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: error: {}", self.program, self.message)
    }
}

impl std::error::Error for FatalError {}

/// Reports `message` framed with the program name of `script`, then exits with status 1.
pub fn report_error(script: impl AsRef<Path>, message: impl Into<String>) -> ! {
    FatalError::new(script, message).exit()
}
