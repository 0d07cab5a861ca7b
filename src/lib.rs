//! Helpers for command-line scripts: usage banners, progress lines and
//! fatal error reporting on stderr.

pub mod error;
pub mod progname;
pub mod progress;
pub mod usage;

pub use error::{FatalError, report_error};
pub use progname::{current_program_name, program_name};
pub use progress::{ProgressLine, finish_progress, report_progress};
pub use usage::format_usage;
