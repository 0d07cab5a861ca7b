use std::process::Command;

#[test]
fn progress_overwrites_one_line_then_ends_it() {
    let out = Command::new(env!("CARGO_BIN_EXE_cliutil"))
        .args(["progress", "--label", "Scanning", "--total", "3"])
        .output()
        .expect("run progress");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.ends_with("\r\n"), "{err:?}");
    assert_eq!(err.matches('\n').count(), 1);

    let updates: Vec<&str> = err.trim_end_matches("\r\n").split('\r').collect();
    assert_eq!(updates.len(), 3);
    for (i, u) in updates.iter().enumerate() {
        assert_eq!(u.chars().count(), 80);
        assert_eq!(u.trim_end(), format!("Scanning: {} / 3", i + 1));
    }
}

#[test]
fn zero_total_only_finishes() {
    let out = Command::new(env!("CARGO_BIN_EXE_cliutil"))
        .args(["progress", "-n", "0"])
        .output()
        .expect("run progress");
    assert!(out.status.success());
    assert_eq!(out.stderr, b"\n");
}
