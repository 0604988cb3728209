use uuid::Uuid;

use guanhai_facts::builtin::{CONST_COMMON_APPDATA, CONST_PROGRAM_FILES};
use guanhai_facts::source::PathSources;
use guanhai_windows::known_folder::known_folder;
use guanhai_windows::source::SystemSources;

struct CleanupEnvVar(String);

impl Drop for CleanupEnvVar {
    fn drop(&mut self) {
        std::env::remove_var(&self.0);
    }
}

#[test]
fn env_var_reads_process_environment() {
    let name = format!("GUANHAI_TEST_{}", Uuid::new_v4().simple());
    let _cleanup = CleanupEnvVar(name.clone());
    std::env::set_var(&name, "C:/Program Files");

    let sources = SystemSources::new();
    assert_eq!(sources.env_var(&name).as_deref(), Some("C:/Program Files"));
}

#[test]
fn env_var_missing_is_none() {
    let name = format!("GUANHAI_TEST_{}", Uuid::new_v4().simple());
    let sources = SystemSources::new();
    assert_eq!(sources.env_var(&name), None);
}

#[test]
fn env_var_keeps_empty_value() {
    let name = format!("GUANHAI_TEST_{}", Uuid::new_v4().simple());
    let _cleanup = CleanupEnvVar(name.clone());
    std::env::set_var(&name, "");

    let sources = SystemSources::new();
    // 空值的判定属于解析逻辑，数据源如实返回
    assert_eq!(sources.env_var(&name).as_deref(), Some(""));
}

#[test]
fn unknown_symbolic_name_is_none() {
    assert_eq!(known_folder("NO_SUCH_FOLDER"), None);
}

#[cfg(windows)]
#[test]
fn known_folders_resolve_on_windows() {
    let appdata = known_folder(CONST_COMMON_APPDATA).expect("COMMON_APPDATA should resolve");
    assert!(appdata.contains(":\\"), "appdata: {appdata}");

    let programfiles = known_folder(CONST_PROGRAM_FILES).expect("PROGRAM_FILES should resolve");
    assert!(programfiles.contains(":\\"), "programfiles: {programfiles}");
}

#[cfg(not(windows))]
#[test]
fn known_folders_are_absent_off_windows() {
    assert_eq!(known_folder(CONST_COMMON_APPDATA), None);
    assert_eq!(known_folder(CONST_PROGRAM_FILES), None);
}
