//! Windows 平台数据源封装（Known Folder、进程环境变量）。
//!
//! 目标：
//! - 将 Win32 细节集中在本 crate，事实核心库只依赖数据源抽象
//! - 非 Windows 平台提供空实现，使采集流程在任意平台可编译可运行
//!   （平台约束已保证 Windows 专有事实在别处不会评估）
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

pub mod known_folder;
pub mod source;
