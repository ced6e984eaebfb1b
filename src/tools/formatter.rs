//! 输出格式化模块
//!
//! 负责掉线报告的JSON格式化、输出文件头部以及输出文件写入。
//! 单条报告的文本行由 [`crate::core::report`] 生成。

use super::cli::AppConfig;
use super::utils;
use crate::core::{DropoutReport, ScanStats};
use crate::error::{AudioError, AudioResult};
use crate::FormatDescriptor;
use serde::Serialize;
use std::path::Path;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON输出结构
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    format: &'a FormatDescriptor,
    samples_processed: u64,
    dropouts_detected: usize,
    reports: &'a [DropoutReport],
}

/// 将报告序列化为格式化的JSON
pub fn format_json(
    file_path: &Path,
    format: &FormatDescriptor,
    stats: &ScanStats,
    dropouts_detected: usize,
    reports: &[DropoutReport],
) -> AudioResult<String> {
    let report = JsonReport {
        file: utils::extract_filename_lossy(file_path),
        format,
        samples_processed: stats.samples_processed,
        dropouts_detected,
        reports,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| AudioError::InvalidInput(format!("JSON序列化失败: {e}")))
}

/// 创建输出文件头部信息
pub fn create_output_header(config: &AppConfig, format: &FormatDescriptor) -> String {
    let mut output = String::new();

    output.push_str(&format!("Dropout Detector v{VERSION} / PCM digital dropout scan\n"));
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    output.push_str(&format!("log date: {now}\n\n"));

    output.push_str(
        "--------------------------------------------------------------------------------\n",
    );
    output.push_str(&format!(
        "File: {}\n",
        utils::extract_filename_lossy(&config.input_path)
    ));
    output.push_str(&format!("Format: {format}\n"));
    output.push_str(
        "--------------------------------------------------------------------------------\n\n",
    );

    output
}

/// 写入输出文件
pub fn write_output(path: &Path, content: &str) -> AudioResult<()> {
    std::fs::write(path, content).map_err(|e| AudioError::OutputError(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(time_seconds: f64) -> DropoutReport {
        DropoutReport {
            time_seconds,
            sample_position: (time_seconds * 44100.0) as u64,
            channel: 1,
            consecutive_count: 10,
        }
    }

    #[test]
    fn test_json_contains_reports() {
        let format = FormatDescriptor::pcm_signed(44100.0, 1, 16);
        let stats = ScanStats {
            samples_processed: 100,
            open_runs_over_threshold: 0,
        };
        let json = format_json(
            Path::new("/data/take.wav"),
            &format,
            &stats,
            3,
            &[report(0.5)],
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "take.wav");
        assert_eq!(value["samples_processed"], 100);
        assert_eq!(value["dropouts_detected"], 3);
        assert_eq!(value["format"]["encoding"], "PcmSigned");
        assert_eq!(value["reports"][0]["consecutive_count"], 10);
    }

    #[test]
    fn test_output_header_contains_format_line() {
        let config = AppConfig {
            input_path: PathBuf::from("/data/take.wav"),
            verbose: false,
            output_path: None,
            json: false,
        };
        let format = FormatDescriptor::pcm_signed(48000.0, 2, 24);
        let header = create_output_header(&config, &format);
        assert!(header.contains("log date: "));
        assert!(header.contains("File: take.wav"));
        assert!(header.contains("Format: PCM_SIGNED 48000.0 Hz, 24 bit, stereo"));
    }

    #[test]
    fn test_write_output_failure_names_output_path() {
        let dir = std::env::temp_dir().join(format!(
            "dropout_detector_{}_missing_dir",
            std::process::id()
        ));
        let target = dir.join("report.txt");

        let err = write_output(&target, "content").unwrap_err();
        match err {
            AudioError::OutputError(path, _) => assert_eq!(path, target),
            other => panic!("期望输出文件错误，实际: {other:?}"),
        }
    }
}
