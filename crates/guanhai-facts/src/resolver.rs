//! 路径事实解析：双数据源查找优先级 + 归一化。
//!
//! 规则：
//! - 结构化源（OS 常量表）已定义 → 直接采用其值，忽略环境变量回退
//! - 结构化源未定义 → 采用环境变量回退，但空字符串视为“无值”
//! - 两者均无 → 返回 `None`（“无值”是正常结果，不是错误，不做默认值兜底）
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

use crate::normalize::normalize_windows_path;

/// 按优先级从两个数据源解析一条 Windows 路径并归一化。
///
/// 参数：
/// - `primary`：结构化源取到的值（`None` 表示该符号名未定义）
/// - `fallback`：环境变量回退取到的值（`None` 表示该变量不存在）
///
/// 返回值：
/// - `Some(path)`：归一化后的路径（见 [`normalize_windows_path`]）
/// - `None`：两个源都无可用值；由调用方决定兜底策略
///
/// 说明：
/// - 结构化源只要“已定义”即胜出，不检查内容；回退源额外要求非空
///   （空字符串环境变量按“未设置”处理）
pub fn resolve_windows_path(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    if let Some(value) = primary {
        return Some(normalize_windows_path(&value));
    }
    let value = fallback?;
    if value.is_empty() {
        return None;
    }
    Some(normalize_windows_path(&value))
}
