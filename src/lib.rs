//! Dropout Detector - PCM音频数字掉线检测工具
//!
//! 扫描PCM WAV文件中的"掉线"（dropout）：某声道上连续出现的逐位相同样本值，
//! 这是数字录音/转录错误的典型特征。
//!
//! ## 核心特性
//! - 1-4字节任意位宽的小端补码样本解码（统一的"补零+算术右移"符号扩展）
//! - 单次前向流式扫描，每声道 O(1) 状态
//! - 1秒去抖窗口的报告合并

pub mod audio;
pub mod core;
pub mod error;
pub mod tools;

// 重新导出核心类型
pub use audio::{ByteOrder, Encoding, FormatDescriptor, FrameReader, ProblemReport};
pub use crate::core::{Dropout, DropoutReport, DropoutScanner, ReportCoalescer, SampleFrame};
pub use error::{AudioError, AudioResult};
