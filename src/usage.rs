use crate::progname::program_name;

/// Builds `"<name> [-h]\n"` followed by `description`, left-stripped line by
/// line and indented to sit under the `"usage: <name> "` column.
///
/// The returned text is never printed here; callers decide where it goes.
pub fn format_usage(script: impl AsRef<std::path::Path>, description: &str) -> String {
    let name = program_name(script);
    let offset = "usage: ".len() + name.chars().count() + 1;

    let mut out = format!("{name} [-h]\n");
    out.push_str(&indent_block(&strip_leading_whitespace(description), offset));
    out
}

/// Removes the leading whitespace run of every line.
///
/// Line breaks count as whitespace, so lines holding nothing but whitespace
/// disappear along with their terminator.
pub fn strip_leading_whitespace(text: &str) -> String {
    text.split_inclusive('\n')
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Prefixes `width` spaces to every line that has non-whitespace content.
pub fn indent_block(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}
