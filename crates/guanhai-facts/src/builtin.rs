//! 内置事实：观海代理部署所需的 Windows 目录。
//!
//! 说明：
//! - 部署编排依赖两条路径事实定位落盘位置：公共应用数据目录（ProgramData）
//!   与 Program Files 目录
//! - 两条事实均只在 Windows 内核族上评估；其他平台视为“不适用”
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

use crate::fact::{FactDefinition, FactRegistry, Kernel};
use crate::resolver::resolve_windows_path;
use crate::source::PathSources;

/// 事实名：公共应用数据目录（通常为 `C:\ProgramData`）。
pub const FACT_AGENT_APPDATA: &str = "guanhai_agent_appdata";

/// 事实名：Program Files 目录（通常为 `C:\Program Files`）。
pub const FACT_AGENT_PROGRAMFILES: &str = "guanhai_agent_programfiles";

/// 结构化源符号名：公共应用数据目录。
pub const CONST_COMMON_APPDATA: &str = "COMMON_APPDATA";

/// 结构化源符号名：Program Files 目录。
pub const CONST_PROGRAM_FILES: &str = "PROGRAM_FILES";

/// 环境变量回退名：公共应用数据目录。
pub const ENV_PROGRAM_DATA: &str = "ProgramData";

/// 环境变量回退名：Program Files 目录。
pub const ENV_PROGRAM_FILES: &str = "ProgramFiles";

/// 构建包含全部内置事实的注册表。
///
/// 返回值：
/// - 已注册两条 Windows 路径事实的 [`FactRegistry`]
pub fn builtin_registry() -> FactRegistry {
    let mut registry = FactRegistry::new();
    registry.register(path_fact(
        FACT_AGENT_APPDATA,
        CONST_COMMON_APPDATA,
        ENV_PROGRAM_DATA,
    ));
    registry.register(path_fact(
        FACT_AGENT_PROGRAMFILES,
        CONST_PROGRAM_FILES,
        ENV_PROGRAM_FILES,
    ));
    registry
}

/// 构造一条“结构化源优先、环境变量回退”的 Windows 路径事实。
///
/// 参数：
/// - `name`：事实名称
/// - `constant`：结构化源符号名
/// - `env`：环境变量回退名
fn path_fact(name: &str, constant: &'static str, env: &'static str) -> FactDefinition {
    FactDefinition::new(name, Some(Kernel::Windows), move |sources: &dyn PathSources| {
        resolve_windows_path(sources.os_constant(constant), sources.env_var(env))
    })
}
