//! Dropout Detector - 主程序入口
//!
//! 纯流程控制器，负责协调各个工具模块完成掉线检测任务。

use dropout_detector::{
    error::{AudioError, ErrorCategory},
    tools::{self, constants::messages},
};
use std::process;

/// 错误退出码定义
mod exit_codes {
    /// 通用错误（含I/O错误）
    pub const GENERAL_ERROR: i32 = 1;
    /// 容器格式错误（非WAV、头部损坏）
    pub const FORMAT_ERROR: i32 = 2;
    /// 解码失败
    pub const DECODING_ERROR: i32 = 3;
}

/// 获取错误建议文本
fn get_error_suggestion(error: &AudioError) -> &'static str {
    match error {
        AudioError::OutputError(..) => {
            "检查输出文件所在目录是否存在且可写 / Check that the output directory exists and is writable"
        }
        _ => match ErrorCategory::from_audio_error(error) {
            ErrorCategory::Io => {
                "检查文件路径是否正确，文件是否存在且可读 / Check if file path is correct, file exists and is readable"
            }
            ErrorCategory::Format => {
                "仅支持PCM有符号小端WAV：16/24位，单声道或立体声，44.1kHz或48kHz / Only little-endian signed PCM WAV is supported: 16/24 bit, mono or stereo, 44.1kHz or 48kHz"
            }
            ErrorCategory::Decoding => "文件可能损坏或被截断 / File may be corrupted or truncated",
            ErrorCategory::Other => {
                "请检查输入文件和参数设置 / Please check input file and parameter settings"
            }
        },
    }
}

/// 错误处理和建议
fn handle_error(error: AudioError) -> ! {
    let category = ErrorCategory::from_audio_error(&error);

    if let AudioError::UnreadableInput(..) = &error {
        println!("{}", messages::CANNOT_READ_FILE);
    }
    eprintln!("[ERROR] {} / Error: {error}", category.display_name());
    eprintln!("[INFO] 建议 / Suggestion: {}", get_error_suggestion(&error));

    let exit_code = match category {
        ErrorCategory::Format => exit_codes::FORMAT_ERROR,
        ErrorCategory::Decoding => exit_codes::DECODING_ERROR,
        ErrorCategory::Io | ErrorCategory::Other => exit_codes::GENERAL_ERROR,
    };

    process::exit(exit_code);
}

/// 应用程序主逻辑（便于测试和复用）
fn run() -> Result<(), AudioError> {
    // 1. 解析命令行参数
    let config = tools::parse_args();

    // 2. 显示启动信息
    tools::show_startup_info(&config);

    // 3. 校验格式、扫描并输出
    let output = tools::process_single_audio_file(&config.input_path, &config)?;
    tools::output_results(&output, &config)?;

    tools::show_completion_info(&config);
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        // 格式不符不是致命错误：逐条列出问题，跳过扫描，正常退出
        Err(AudioError::UnsupportedFormat(problems)) => {
            for problem in problems {
                println!("{problem}");
            }
        }
        Err(error) => handle_error(error),
    }
}
