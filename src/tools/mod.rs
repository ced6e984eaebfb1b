//! 工具模块集合
//!
//! 包含CLI、常量、文件处理、格式化等工具模块，支持main.rs的流程控制。

pub mod cli;
pub mod constants;
pub mod formatter;
pub mod processor;
pub mod utils;

// 重新导出主要的公共接口
pub use cli::{AppConfig, parse_args, show_completion_info, show_startup_info};
pub use formatter::{create_output_header, format_json, write_output};
pub use processor::{
    AnalysisOutput, analyze_file, analyze_stream, output_results, process_single_audio_file,
    render_results, validate_format,
};
