//! 生产数据源实现：Known Folder + 进程环境变量。
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

use guanhai_facts::source::PathSources;
use tracing::debug;

use crate::known_folder::known_folder;

/// 真实系统数据源。
///
/// 说明：
/// - 结构化源查询 Known Folder（非 Windows 平台恒为无值）
/// - 回退源查询进程环境变量；变量存在但为空时仍返回 `Some("")`，
///   空值语义由解析逻辑统一判定
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSources;

impl SystemSources {
    /// 创建系统数据源。
    pub fn new() -> Self {
        Self
    }
}

impl PathSources for SystemSources {
    /// 按符号名查询 Known Folder 路径。
    fn os_constant(&self, name: &str) -> Option<String> {
        let value = known_folder(name);
        debug!("结构化源查询: {name} -> {value:?}");
        value
    }

    /// 查询进程环境变量（不存在或非 Unicode 内容按无值处理）。
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
