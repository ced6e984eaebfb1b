//! 命令行接口模块
//!
//! 负责命令行参数解析、配置管理和程序信息展示。

use clap::{Arg, Command};
use std::path::PathBuf;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 输入WAV文件路径
    pub input_path: PathBuf,

    /// 是否显示详细信息
    pub verbose: bool,

    /// 输出文件路径（可选）
    pub output_path: Option<PathBuf>,

    /// 以JSON格式输出报告
    pub json: bool,
}

/// 构建命令行定义
pub fn build_command() -> Command {
    Command::new("dropout-detector")
        .version(VERSION)
        .about(DESCRIPTION)
        .author("Dropout Detector Team")
        .arg(
            Arg::new("INPUT")
                .help("要检查的WAV文件路径（PCM 16/24位，单声道或立体声，44.1kHz或48kHz）")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("显示详细处理信息")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("同时将报告写入文件")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("以JSON格式输出报告")
                .action(clap::ArgAction::SetTrue),
        )
}

/// 从参数列表解析配置（便于测试）
pub fn parse_args_from<I, T>(args: I) -> Result<AppConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;

    Ok(AppConfig {
        input_path: matches
            .get_one::<String>("INPUT")
            .map(PathBuf::from)
            .unwrap_or_default(),
        verbose: matches.get_flag("verbose"),
        output_path: matches.get_one::<String>("output").map(PathBuf::from),
        json: matches.get_flag("json"),
    })
}

/// 解析命令行参数并创建配置（参数错误时打印用法并退出）
pub fn parse_args() -> AppConfig {
    parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

/// 显示程序启动信息
pub fn show_startup_info(config: &AppConfig) {
    if config.verbose {
        println!("[INFO] Dropout Detector v{VERSION} 启动 / starting");
        println!("[INFO] {DESCRIPTION}");
        println!();
    }
}

/// 显示程序完成信息
pub fn show_completion_info(config: &AppConfig) {
    if config.verbose {
        println!("[INFO] 检查完成 / Scan complete");
    }
}
