//! 查找数据源抽象。
//!
//! 目的：
//! - 将“OS 常量表 / 进程环境变量”这类全局只读状态收敛为显式参数，
//!   事实解析函数不直接触碰进程环境，单元测试可注入确定性的替身
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

/// 路径事实的两级查找数据源。
///
/// 约定：
/// - `os_constant`：结构化源，按符号名（如 `COMMON_APPDATA`）查询
///   OS 提供的常量/注册值；未定义返回 `None`
/// - `env_var`：回退源，按名称查询进程环境变量；不存在返回 `None`
///   （存在但为空字符串时仍返回 `Some("")`，空值判定由解析逻辑负责）
///
/// 实现方：
/// - 生产实现见 `guanhai-windows` 的 `SystemSources`
/// - 测试使用 map 替身（见各 tests 文件）
pub trait PathSources {
    /// 查询结构化源中的符号名对应值。
    fn os_constant(&self, name: &str) -> Option<String>;

    /// 查询进程环境变量。
    fn env_var(&self, name: &str) -> Option<String>;
}
