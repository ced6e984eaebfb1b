//! 报告合并器
//!
//! 以1秒去抖窗口筛选掉线记录：与上一条**已报告**记录的时间差不超过1秒的记录被直接丢弃
//! （不合并、不计数），被丢弃的记录不会重置窗口。

use super::dropout_scanner::Dropout;
use crate::tools::constants::report::{
    DEBOUNCE_WINDOW_SECONDS, INITIAL_LAST_REPORTED_SECONDS, NO_DROPOUTS_MESSAGE,
};
use serde::Serialize;

/// 一条面向用户的掉线报告
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropoutReport {
    /// 近似时间位置（秒）
    pub time_seconds: f64,
    pub sample_position: u64,
    pub channel: usize,
    pub consecutive_count: u32,
}

/// 流式报告合并器
#[derive(Debug, Clone)]
pub struct ReportCoalescer {
    sample_rate_hz: f64,
    last_reported_seconds: f64,
}

impl ReportCoalescer {
    /// 创建合并器
    ///
    /// # Panics
    ///
    /// 采样率不为正数时panic
    pub fn new(sample_rate_hz: f64) -> Self {
        assert!(sample_rate_hz > 0.0, "采样率必须为正数");
        Self {
            sample_rate_hz,
            last_reported_seconds: INITIAL_LAST_REPORTED_SECONDS,
        }
    }

    /// 按时间顺序提交一条掉线记录；需要报告时返回报告，否则返回 `None`
    pub fn offer(&mut self, dropout: &Dropout) -> Option<DropoutReport> {
        let time_seconds = dropout.sample_position as f64 / self.sample_rate_hz;
        if time_seconds - self.last_reported_seconds > DEBOUNCE_WINDOW_SECONDS {
            self.last_reported_seconds = time_seconds;
            Some(DropoutReport {
                time_seconds,
                sample_position: dropout.sample_position,
                channel: dropout.channel,
                consecutive_count: dropout.consecutive_count,
            })
        } else {
            None
        }
    }
}

/// 批量合并：返回需要报告的记录
pub fn coalesce(dropouts: &[Dropout], sample_rate_hz: f64) -> Vec<DropoutReport> {
    let mut coalescer = ReportCoalescer::new(sample_rate_hz);
    dropouts.iter().filter_map(|d| coalescer.offer(d)).collect()
}

/// 合并并格式化为可打印的行；没有掉线时返回单行 "No Dropouts Detected."
pub fn summarize(dropouts: &[Dropout], sample_rate_hz: f64) -> Vec<String> {
    format_report_lines(&coalesce(dropouts, sample_rate_hz))
}

/// 格式化单条报告
///
/// 形如 `Dropout at 0:01.234 (1.234s), channel 0, 10 identical samples`
pub fn format_report_line(report: &DropoutReport) -> String {
    format!(
        "Dropout at {} ({:.3}s), channel {}, {} identical samples",
        format_timestamp(report.time_seconds),
        report.time_seconds,
        report.channel,
        report.consecutive_count
    )
}

/// 格式化全部报告；为空时返回单行 "No Dropouts Detected."
pub fn format_report_lines(reports: &[DropoutReport]) -> Vec<String> {
    if reports.is_empty() {
        return vec![NO_DROPOUTS_MESSAGE.to_string()];
    }
    reports.iter().map(format_report_line).collect()
}

/// 将秒数格式化为 `m:ss.mmm`
///
/// 先取整到毫秒再拆分，秒字段不会进位成60。
fn format_timestamp(seconds: f64) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let minutes = total_millis / 60_000;
    let millis = total_millis % 60_000;
    format!("{minutes}:{:02}.{:03}", millis / 1000, millis % 1000)
}
