use std::env;
use std::path::Path;

use once_cell::sync::Lazy;

static CURRENT: Lazy<String> = Lazy::new(|| {
    env::args_os()
        .next()
        .and_then(|argv0| base_name(Path::new(&argv0)))
        .or_else(|| env::current_exe().ok().and_then(|exe| base_name(&exe)))
        .unwrap_or_else(|| "unknown".to_string())
});

fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}

/// Returns the display name for `script`: its last path component, extension kept.
///
/// Falls back to [`current_program_name`] when the reference has no file name
/// (empty path, root, or a trailing `..`).
pub fn program_name(script: impl AsRef<Path>) -> String {
    base_name(script.as_ref()).unwrap_or_else(|| current_program_name().to_string())
}

/// Name of the running executable, taken from `argv[0]` on first use.
pub fn current_program_name() -> &'static str {
    CURRENT.as_str()
}
