//! 文件处理模块
//!
//! 串联格式校验、逐帧解码、掉线扫描与报告合并，并负责结果输出。

use super::cli::AppConfig;
use super::formatter;
use crate::audio::{self, FormatDescriptor, FrameReader};
use crate::core::{
    Dropout, DropoutReport, DropoutScanner, ReportCoalescer, ScanStats, decode_frame_into,
    format_report_lines,
};
use crate::error::{AudioError, AudioResult};
use std::io::Read;
use std::path::Path;

/// 单个文件的分析结果
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub format: FormatDescriptor,
    pub stats: ScanStats,
    /// 扫描器产生的全部原始记录（按检测顺序）
    pub dropouts: Vec<Dropout>,
    /// 去抖后需要报告的记录
    pub reports: Vec<DropoutReport>,
    /// 流末尾被丢弃的不完整帧字节数
    pub truncated_tail_bytes: usize,
}

/// 格式闸门：未通过校验时返回携带全部问题的 `AudioError::UnsupportedFormat`
pub fn validate_format(format: &FormatDescriptor) -> AudioResult<()> {
    let problems = format.validate();
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AudioError::UnsupportedFormat(problems))
    }
}

/// 对一个已打开的帧流执行完整分析
///
/// 先过格式闸门，未通过则不读取任何帧。
pub fn analyze_stream<R: Read>(
    format: &FormatDescriptor,
    frames: &mut FrameReader<R>,
) -> AudioResult<AnalysisOutput> {
    validate_format(format)?;
    scan_frames(format, frames)
}

/// 逐帧解码、扫描并增量合并（调用方须已通过 [`validate_format`]）
fn scan_frames<R: Read>(
    format: &FormatDescriptor,
    frames: &mut FrameReader<R>,
) -> AudioResult<AnalysisOutput> {
    let channel_count = format.channels_usize();
    let mut scanner = DropoutScanner::new(channel_count);
    let mut coalescer = ReportCoalescer::new(format.sample_rate_hz as f64);
    let mut samples = vec![0i32; channel_count];
    let mut dropouts = Vec::new();
    let mut reports = Vec::new();

    while let Some(frame_bytes) = frames.next_frame()? {
        decode_frame_into(frame_bytes, channel_count, &mut samples);
        let emitted = scanner.push_frame(&samples, &mut dropouts);

        // 增量合并：新记录按时间顺序立即送入合并器
        for dropout in &dropouts[dropouts.len() - emitted..] {
            if let Some(report) = coalescer.offer(dropout) {
                reports.push(report);
            }
        }
    }

    Ok(AnalysisOutput {
        format: format.clone(),
        stats: scanner.finish(),
        dropouts,
        reports,
        truncated_tail_bytes: frames.truncated_tail_bytes(),
    })
}

/// 打开并分析WAV文件
pub fn analyze_file(path: &Path) -> AudioResult<AnalysisOutput> {
    let (format, mut frames) = audio::open_wav(path)?;
    analyze_stream(&format, &mut frames)
}

/// 处理单个音频文件并显示详细信息
pub fn process_single_audio_file(
    path: &Path,
    config: &AppConfig,
) -> AudioResult<AnalysisOutput> {
    if config.verbose {
        println!("[INFO] 加载音频文件 / Loading audio file: {}", path.display());
    }

    let (format, mut frames) = audio::open_wav(path)?;
    validate_format(&format)?;

    if !config.json {
        println!("{format}");
    }

    let output = scan_frames(&format, &mut frames)?;

    if config.verbose {
        println!(
            "[INFO] 已扫描 / Scanned: {} 帧 / frames",
            output.stats.samples_processed
        );
        println!(
            "[INFO] 原始掉线记录 / Raw dropouts: {}，报告 / reported: {}",
            output.dropouts.len(),
            output.reports.len()
        );
        if output.stats.open_runs_over_threshold > 0 {
            println!(
                "[INFO] 文件末尾未中断的相同值游程（不报告） / Unterminated runs at end of file (not reported): {}",
                output.stats.open_runs_over_threshold
            );
        }
        if output.truncated_tail_bytes > 0 {
            println!(
                "[WARNING] 末尾不完整帧已忽略 / Ignored incomplete trailing frame: {} bytes",
                output.truncated_tail_bytes
            );
        }
    }

    Ok(output)
}

/// 渲染分析结果（文本行或JSON）
pub fn render_results(output: &AnalysisOutput, config: &AppConfig) -> AudioResult<String> {
    if config.json {
        let mut json = formatter::format_json(
            &config.input_path,
            &output.format,
            &output.stats,
            output.dropouts.len(),
            &output.reports,
        )?;
        json.push('\n');
        Ok(json)
    } else {
        let mut text = String::new();
        for line in format_report_lines(&output.reports) {
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }
}

/// 输出结果到控制台，并在指定时写入文件
pub fn output_results(output: &AnalysisOutput, config: &AppConfig) -> AudioResult<()> {
    let rendered = render_results(output, config)?;
    print!("{rendered}");

    if let Some(output_path) = &config.output_path {
        let content = if config.json {
            rendered
        } else {
            let mut content = formatter::create_output_header(config, &output.format);
            content.push_str(&rendered);
            content
        };
        formatter::write_output(output_path, &content)?;
        if config.verbose {
            println!(
                "[INFO] 结果已保存 / Results saved to: {}",
                output_path.display()
            );
        }
    }

    Ok(())
}
