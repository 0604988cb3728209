//! 事实（fact）模型与注册表。
//!
//! 设计：
//! - 每条事实 = 名称 + 平台约束（confine）+ 解析函数
//! - 注册表在采集阶段逐条评估：约束不满足则跳过，解析无值则省略
//! - 以显式函数引用代替宿主框架的声明式注册块，不需要动态派发机制
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::source::PathSources;

/// 操作系统内核族（用于事实的平台约束）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    /// Windows 族（含各版本桌面/服务器）。
    Windows,
    /// Linux 族。
    Linux,
    /// macOS。
    Darwin,
    /// 其他/未识别内核。
    Other,
}

impl Kernel {
    /// 识别当前运行平台的内核族。
    ///
    /// 返回值：
    /// - 依据编译目标的 OS 标识归类；无法归类的平台返回 [`Kernel::Other`]
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Kernel::Windows,
            "linux" => Kernel::Linux,
            "macos" => Kernel::Darwin,
            _ => Kernel::Other,
        }
    }
}

impl fmt::Display for Kernel {
    /// 输出小写内核族名（与序列化形式一致，便于日志/报告对照）。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kernel::Windows => "windows",
            Kernel::Linux => "linux",
            Kernel::Darwin => "darwin",
            Kernel::Other => "other",
        };
        f.write_str(name)
    }
}

/// 事实解析函数类型。
///
/// 约定：
/// - 入参为查找数据源集合；返回 `None` 表示“本机无此事实”（正常结果）
/// - 解析必须无副作用，可被并发调用
pub type FactResolver = Box<dyn Fn(&dyn PathSources) -> Option<String> + Send + Sync>;

/// 一条已注册的事实定义。
pub struct FactDefinition {
    /// 事实名称（采集结果中的键）。
    pub name: String,
    /// 平台约束：`Some(kernel)` 时仅在对应内核族上评估；`None` 表示不限平台。
    pub confine: Option<Kernel>,
    /// 解析函数。
    pub resolver: FactResolver,
}

impl FactDefinition {
    /// 创建一条事实定义。
    ///
    /// 参数：
    /// - `name`：事实名称
    /// - `confine`：平台约束（可选）
    /// - `resolver`：解析函数
    pub fn new(
        name: impl Into<String>,
        confine: Option<Kernel>,
        resolver: impl Fn(&dyn PathSources) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            confine,
            resolver: Box::new(resolver),
        }
    }
}

/// 事实注册表：名称 → （平台约束，解析函数）。
#[derive(Default)]
pub struct FactRegistry {
    facts: Vec<FactDefinition>,
}

impl FactRegistry {
    /// 创建空注册表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一条事实。
    ///
    /// 说明：
    /// - 按注册顺序评估；同名重复注册不去重，由上层保证名称唯一
    pub fn register(&mut self, fact: FactDefinition) {
        self.facts.push(fact);
    }

    /// 已注册事实的名称列表（按注册顺序）。
    pub fn names(&self) -> Vec<&str> {
        self.facts.iter().map(|f| f.name.as_str()).collect()
    }

    /// 执行一轮采集：评估所有事实并汇总有值结果。
    ///
    /// 参数：
    /// - `kernel`：当前内核族（用于平台约束判定）
    /// - `sources`：查找数据源集合
    ///
    /// 返回值：
    /// - 事实名 → 值 的有序映射；约束不满足或解析无值的事实不出现在结果中
    ///
    /// 说明：
    /// - “无值”不是错误，不告警；仅以 debug 级日志记录跳过原因，便于排障
    pub fn collect(&self, kernel: Kernel, sources: &dyn PathSources) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        for fact in &self.facts {
            if let Some(required) = fact.confine {
                if required != kernel {
                    debug!("事实平台约束不满足，跳过: {} (需要 {required})", fact.name);
                    continue;
                }
            }
            match (fact.resolver)(sources) {
                Some(value) => {
                    values.insert(fact.name.clone(), value);
                }
                None => {
                    debug!("事实在本机无可用值: {}", fact.name);
                }
            }
        }
        values
    }
}
