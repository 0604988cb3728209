//! 事实采集器（collector）。
//!
//! 职责：
//! - 以内置注册表为准执行一轮事实采集，供部署编排消费
//! - `collect`：输出采集结果（文本或 JSON，JSON 供机器消费）
//! - `doctor`：输出内核族与各查找源的原始可用性（用于部署排障）
//!
//! 说明：
//! - “无值”是正常结果：平台约束不满足或两级查找均无数据的事实
//!   不出现在输出中，由下游自行决定兜底策略
//!
//! 作者：观海运维项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use guanhai_facts::builtin::{
    builtin_registry, CONST_COMMON_APPDATA, CONST_PROGRAM_FILES, ENV_PROGRAM_DATA,
    ENV_PROGRAM_FILES,
};
use guanhai_facts::fact::Kernel;
use guanhai_facts::source::PathSources;
use guanhai_windows::source::SystemSources;

/// 命令行参数。
#[derive(Debug, Parser)]
#[command(name = "guanhai-collector", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// collector 支持的子命令。
#[derive(Debug, Subcommand)]
enum Commands {
    /// 执行一轮事实采集并输出结果（不做系统修改）。
    Collect {
        /// 以 JSON 输出（内核族 + 事实映射），供机器消费。
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// 环境自检（内核族、各查找源原始值）。
    Doctor,
}

/// 采集结果报告（JSON 输出模型）。
#[derive(Debug, Serialize)]
struct CollectReport {
    /// 当前内核族。
    kernel: Kernel,
    /// 事实名 → 值；无值事实不出现。
    facts: BTreeMap<String, String>,
}

/// 程序入口：解析参数并分发子命令。
///
/// 异常处理：
/// - 子命令执行失败会返回 `Err` 并输出日志（由调用方/控制台显示）。
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .with_target(false)
        // 采集结果走 stdout（机器消费），日志一律走 stderr
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect { json } => collect(json),
        Commands::Doctor => doctor(),
    }
}

/// 执行一轮事实采集并输出。
///
/// 参数：
/// - `json`：是否以 JSON 输出
///
/// 异常处理：
/// - JSON 序列化失败会返回错误（正常情况下不应发生）。
fn collect(json: bool) -> Result<()> {
    let kernel = Kernel::current();
    let registry = builtin_registry();
    let sources = SystemSources::new();

    info!("开始采集事实: kernel={kernel}, 已注册 {} 条", registry.names().len());
    let facts = registry.collect(kernel, &sources);
    info!("采集完成: 有值 {} 条", facts.len());

    if json {
        let report = CollectReport { kernel, facts };
        let text = serde_json::to_string_pretty(&report).context("序列化采集报告失败")?;
        println!("{text}");
        return Ok(());
    }

    for (name, value) in &facts {
        println!("{name} = {value}");
    }
    Ok(())
}

/// 环境自检（用于排障）。
///
/// 输出：
/// - 内核族
/// - 两个结构化源符号名与两个环境变量回退的原始值
fn doctor() -> Result<()> {
    let sources = SystemSources::new();
    println!("kernel = {}", Kernel::current());
    println!(
        "os_constant {CONST_COMMON_APPDATA} = {:?}",
        sources.os_constant(CONST_COMMON_APPDATA)
    );
    println!(
        "os_constant {CONST_PROGRAM_FILES} = {:?}",
        sources.os_constant(CONST_PROGRAM_FILES)
    );
    println!(
        "env {ENV_PROGRAM_DATA} = {:?}",
        sources.env_var(ENV_PROGRAM_DATA)
    );
    println!(
        "env {ENV_PROGRAM_FILES} = {:?}",
        sources.env_var(ENV_PROGRAM_FILES)
    );
    Ok(())
}
