//! 核心算法模块
//!
//! 样本解码、掉线扫描和报告合并。

pub mod dropout_scanner;
pub mod report;
pub mod sample_decoder;

pub use dropout_scanner::{Dropout, DropoutScanner, ScanStats, scan};
pub use report::{
    DropoutReport, ReportCoalescer, coalesce, format_report_line, format_report_lines, summarize,
};
pub use sample_decoder::{SampleFrame, decode_frame, decode_frame_into, decode_sample};
