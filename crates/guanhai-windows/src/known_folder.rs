//! Known Folder 查询：按符号名解析系统目录。
//!
//! 说明：
//! - 结构化源以符号名对外（`COMMON_APPDATA` / `PROGRAM_FILES`），
//!   本模块负责映射到对应的 Known Folder ID 并查询实际路径
//! - 查询失败与符号名未定义一律按“无值”处理（返回 `None`），
//!   由上层决定是否走环境变量回退
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

/// 按符号名查询 Known Folder 路径。
///
/// 参数：
/// - `name`：符号名（当前支持 `COMMON_APPDATA`、`PROGRAM_FILES`）
///
/// 返回值：
/// - `Some(path)`：查询成功的目录路径（原始形式，未归一化）
/// - `None`：符号名未定义，或系统查询/解码失败
#[cfg(windows)]
pub fn known_folder(name: &str) -> Option<String> {
    use windows::core::PWSTR;
    use windows::Win32::System::Com::CoTaskMemFree;
    use windows::Win32::UI::Shell::{
        SHGetKnownFolderPath, FOLDERID_ProgramData, FOLDERID_ProgramFiles, KF_FLAG_DEFAULT,
    };

    /// COM 内存释放守卫：释放 `SHGetKnownFolderPath` 返回的 `PWSTR`。
    struct CoTaskMemGuard(PWSTR);
    impl Drop for CoTaskMemGuard {
        /// 自动释放 COM 分配的字符串内存，避免泄漏。
        fn drop(&mut self) {
            unsafe {
                if !self.0.is_null() {
                    CoTaskMemFree(Some(self.0 .0 as *const core::ffi::c_void));
                }
            }
        }
    }

    let folder_id = match name {
        guanhai_facts::builtin::CONST_COMMON_APPDATA => &FOLDERID_ProgramData,
        guanhai_facts::builtin::CONST_PROGRAM_FILES => &FOLDERID_ProgramFiles,
        _ => return None,
    };
    unsafe {
        let path_ptr: PWSTR = SHGetKnownFolderPath(folder_id, KF_FLAG_DEFAULT, None).ok()?;
        let _guard = CoTaskMemGuard(path_ptr);
        path_ptr.to_string().ok()
    }
}

/// 非 Windows 平台：结构化源不存在，任何符号名均无值。
#[cfg(not(windows))]
pub fn known_folder(_name: &str) -> Option<String> {
    None
}
