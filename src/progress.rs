use std::io::{self, Write};

/// Minimum width of a progress line, so a shorter update fully covers the
/// previous one.
pub const PROGRESS_WIDTH: usize = 80;

/// Formats `"<label>: <index+1> / <total>"`, left-aligned in
/// [`PROGRESS_WIDTH`] columns and terminated by a carriage return.
pub fn format_progress(label: &str, index: usize, total: usize) -> String {
    let text = format!("{label}: {} / {total}", index.saturating_add(1));
    format!("{text:<width$}\r", width = PROGRESS_WIDTH)
}

/// Writes one progress update to `out` and flushes it.
///
/// # Errors
/// Returns an error if writing to or flushing `out` fails.
pub fn write_progress<W: Write + ?Sized>(
    out: &mut W,
    label: &str,
    index: usize,
    total: usize,
) -> io::Result<()> {
    out.write_all(format_progress(label, index, total).as_bytes())?;
    out.flush()
}

/// Ends an overwrite sequence so following output starts on a fresh line.
///
/// # Errors
/// Returns an error if writing to or flushing `out` fails.
pub fn write_finish<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\n")?;
    out.flush()
}

/// Overwrites the current stderr line with the progress of step `index` of `total`.
pub fn report_progress(label: &str, index: usize, total: usize) {
    let _ = write_progress(&mut io::stderr().lock(), label, index, total);
}

/// Terminates the progress line on stderr.
pub fn finish_progress() {
    let _ = write_finish(&mut io::stderr().lock());
}

/// A progress line bound to one writer, label and total.
pub struct ProgressLine<W: Write> {
    out: W,
    label: String,
    total: usize,
}

impl<W: Write> ProgressLine<W> {
    pub fn new(out: W, label: impl Into<String>, total: usize) -> Self {
        ProgressLine {
            out,
            label: label.into(),
            total,
        }
    }

    /// Shows step `index` (zero-based).
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn update(&mut self, index: usize) -> io::Result<()> {
        write_progress(&mut self.out, &self.label, index, self.total)
    }

    /// Writes the closing newline and hands back the writer.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn finish(mut self) -> io::Result<W> {
        write_finish(&mut self.out)?;
        Ok(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_one_based_count() {
        let line = format_progress("Scanning", 2, 10);
        assert!(line.starts_with("Scanning: 3 / 10 "));
        assert!(format_progress("x", 0, 5).contains("1 / 5"));
    }

    #[test]
    fn pads_to_width_and_ends_with_carriage_return() {
        let line = format_progress("Scanning", 2, 10);
        assert!(line.ends_with('\r'));
        assert!(!line.contains('\n'));
        let body = line.trim_end_matches('\r');
        assert_eq!(body.chars().count(), PROGRESS_WIDTH);
        assert_eq!(body.trim_end(), "Scanning: 3 / 10");
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let label = "l".repeat(100);
        let line = format_progress(&label, 0, 1);
        assert_eq!(line, format!("{label}: 1 / 1\r"));
    }

    #[test]
    fn no_bounds_check_against_total() {
        assert!(format_progress("over", 9, 3).starts_with("over: 10 / 3"));
        assert!(format_progress("max", usize::MAX, 1).contains(&format!("{} / 1", usize::MAX)));
    }

    #[test]
    fn writer_receives_update_then_newline() {
        let mut buf = Vec::new();
        write_progress(&mut buf, "Copy", 0, 2).unwrap();
        write_progress(&mut buf, "Copy", 1, 2).unwrap();
        write_finish(&mut buf).unwrap();

        let s = String::from_utf8(buf).unwrap();
        let expected = format!(
            "{}{}\n",
            format_progress("Copy", 0, 2),
            format_progress("Copy", 1, 2)
        );
        assert_eq!(s, expected);
        assert_eq!(s.matches('\r').count(), 2);
        assert!(s.ends_with("\r\n"));
    }

    #[test]
    fn progress_line_tracks_label_and_total() {
        let mut p = ProgressLine::new(Vec::new(), "Build", 3);
        for i in 0..3 {
            p.update(i).unwrap();
        }
        let out = String::from_utf8(p.finish().unwrap()).unwrap();
        let updates: Vec<&str> = out.trim_end_matches('\n').split('\r').collect();
        assert_eq!(updates.len(), 4);
        assert_eq!(updates[0].trim_end(), "Build: 1 / 3");
        assert_eq!(updates[2].trim_end(), "Build: 3 / 3");
        assert_eq!(updates[3], "");
    }

    #[test]
    fn into_inner_skips_terminator() {
        let mut p = ProgressLine::new(Vec::new(), "x", 1);
        p.update(0).unwrap();
        let buf = p.into_inner();
        assert!(!buf.ends_with(b"\n"));
    }
}
