use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_guanhai-collector");
    Command::new(exe)
        .args(args)
        .output()
        .expect("run guanhai-collector")
}

#[test]
fn e2e_collect_json_reports_kernel_and_facts() {
    let out = run(&["collect", "--json"]);
    assert!(
        out.status.success(),
        "collect failed: status={:?}, stdout={}, stderr={}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );

    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("collect --json should print valid JSON");

    let kernel = report["kernel"].as_str().expect("kernel should be a string");
    assert!(
        ["windows", "linux", "darwin", "other"].contains(&kernel),
        "kernel: {kernel}"
    );

    let facts = report["facts"].as_object().expect("facts should be an object");
    if cfg!(windows) {
        assert!(
            facts.contains_key("guanhai_agent_appdata"),
            "facts: {facts:?}"
        );
        assert!(
            facts.contains_key("guanhai_agent_programfiles"),
            "facts: {facts:?}"
        );
    } else {
        assert!(
            facts.is_empty(),
            "Windows 专有事实不应在其他平台出现: {facts:?}"
        );
    }
}

#[test]
fn e2e_collect_text_lists_name_value_pairs() {
    let out = run(&["collect"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    if cfg!(windows) {
        assert!(
            stdout.contains("guanhai_agent_appdata = "),
            "stdout: {stdout}"
        );
    }
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        assert!(line.contains(" = "), "unexpected line: {line}");
    }
}

#[test]
fn e2e_doctor_prints_kernel_and_sources() {
    let out = run(&["doctor"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("kernel = "), "stdout: {stdout}");
    assert!(stdout.contains("os_constant COMMON_APPDATA = "), "stdout: {stdout}");
    assert!(stdout.contains("env ProgramData = "), "stdout: {stdout}");
}
