//! 观海部署事实采集核心库（跨平台/不绑定具体操作系统 API）。
//!
//! 功能：
//! - 定义事实（fact）模型与注册表：按名称注册“平台约束 + 解析函数”
//! - 提供 Windows 路径事实共用的查找优先级与归一化逻辑
//! - 定义查找数据源抽象（OS 常量表 / 进程环境变量），便于注入测试替身
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

pub mod builtin;
pub mod fact;
pub mod normalize;
pub mod resolver;
pub mod source;
