//! Windows 路径字符串归一化。
//!
//! 背景：
//! - 上游数据源（OS 常量表、环境变量、部署脚本）给出的路径风格不一：
//!   有的用 `\ ` 转义路径中的空格（如 `Program\ Files`），有的用正斜杠分隔
//! - 下游自动化统一消费“反斜杠分隔、空格不转义”的 Windows 路径
//!
//! 约定：
//! - 先还原转义空格，再统一分隔符；两步顺序是契约的一部分，
//!   对同时含 `\ ` 与 `/` 的输入不可交换
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

/// 将原始路径字符串归一化为 Windows 约定形式。
///
/// 处理步骤（顺序固定）：
/// 1) 每个“反斜杠 + 空白字符”二元组替换为单个空格（`Program\ Files` → `Program Files`）
/// 2) 每个正斜杠替换为反斜杠（`C:/Foo` → `C:\Foo`）
///
/// 参数：
/// - `raw`：任一数据源给出的原始路径字符串
///
/// 返回值：
/// - 归一化后的字符串；对已归一化的输入原样返回（幂等）
pub fn normalize_windows_path(raw: &str) -> String {
    unescape_spaces(raw).replace('/', "\\")
}

/// 还原转义空格：`\ `（反斜杠 + 任意空白字符）→ 单个空格。
///
/// 参数：
/// - `raw`：原始字符串
///
/// 返回值：
/// - 还原后的字符串；不匹配该模式的反斜杠（如路径分隔符）保持不变
fn unescape_spaces(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.peek().copied() {
                if next.is_whitespace() {
                    chars.next();
                    out.push(' ');
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
