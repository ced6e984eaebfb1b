//! 音频格式描述与格式校验模块
//!
//! `FormatDescriptor` 由容器层读取一次后在整个扫描过程中保持不变；
//! `validate` 是扫描前的闸门，一次性列出全部不满足的条件。

use crate::tools::constants::supported;
use serde::Serialize;
use std::fmt;

/// 格式校验结果：空列表表示格式被接受
pub type ProblemReport = Vec<String>;

/// 样本编码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Encoding {
    /// 有符号线性PCM（补码）
    PcmSigned,
    /// 无符号线性PCM（8位WAV）
    PcmUnsigned,
    /// IEEE浮点PCM
    PcmFloat,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::PcmSigned => "PCM_SIGNED",
            Encoding::PcmUnsigned => "PCM_UNSIGNED",
            Encoding::PcmFloat => "PCM_FLOAT",
        };
        f.write_str(name)
    }
}

/// 字节序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ByteOrder {
    Little,
    Big,
}

/// 音频格式描述
///
/// `frame_size_bytes` 以容器提供的值为准，解码器按此长度切帧，
/// 不再从 `channel_count × bits_per_sample / 8` 重新推导。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatDescriptor {
    pub encoding: Encoding,
    pub byte_order: ByteOrder,
    pub sample_rate_hz: f32,
    pub channel_count: u16,
    pub bits_per_sample: u16,
    pub frame_size_bytes: usize,
}

impl FormatDescriptor {
    /// 创建小端有符号PCM格式描述（帧长度按声道数和位深推导）
    pub fn pcm_signed(sample_rate_hz: f32, channel_count: u16, bits_per_sample: u16) -> Self {
        Self {
            encoding: Encoding::PcmSigned,
            byte_order: ByteOrder::Little,
            sample_rate_hz,
            channel_count,
            bits_per_sample,
            frame_size_bytes: channel_count as usize * (bits_per_sample as usize).div_ceil(8),
        }
    }

    /// 校验格式是否在支持范围内，返回全部问题（不短路）
    pub fn validate(&self) -> ProblemReport {
        validate(self)
    }

    /// 获取声道数（usize类型）
    ///
    /// 辅助方法，用于数组索引和循环边界，避免重复的类型转换
    pub fn channels_usize(&self) -> usize {
        self.channel_count as usize
    }
}

/// 单行格式描述：
/// `PCM_SIGNED 44100.0 Hz, 16 bit, stereo, 4 bytes/frame, little-endian`
impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = match self.channel_count {
            1 => "mono".to_string(),
            2 => "stereo".to_string(),
            n => format!("{n} channels"),
        };
        let order = match self.byte_order {
            ByteOrder::Little => "little-endian",
            ByteOrder::Big => "big-endian",
        };
        write!(
            f,
            "{} {:.1} Hz, {} bit, {}, {} bytes/frame, {}",
            self.encoding,
            self.sample_rate_hz,
            self.bits_per_sample,
            channels,
            self.frame_size_bytes,
            order
        )
    }
}

/// 校验格式描述
///
/// 五项检查互相独立且全部执行，每项失败追加一条包含实际值的描述。
pub fn validate(fmt: &FormatDescriptor) -> ProblemReport {
    let mut problems = ProblemReport::with_capacity(2);

    if fmt.encoding != Encoding::PcmSigned {
        problems.push(format!(
            "File must be a PCM Signed audio file.  This file is: {}",
            fmt.encoding
        ));
    }
    if fmt.byte_order == ByteOrder::Big {
        problems.push("File must be little endian.  This file is big endian.".to_string());
    }
    if !supported::SAMPLE_RATES_HZ.contains(&fmt.sample_rate_hz) {
        problems.push(format!(
            "File sample rate must be 44.1kHz or 48kHz.  This file is: {:.1}Hz",
            fmt.sample_rate_hz
        ));
    }
    if !supported::CHANNEL_COUNTS.contains(&fmt.channel_count) {
        problems.push(format!(
            "File must be mono or stereo.  This file has: {} channels",
            fmt.channel_count
        ));
    }
    if !supported::BITS_PER_SAMPLE.contains(&fmt.bits_per_sample) {
        problems.push(format!(
            "File must be a 16 bit or 24 bit recording.  This file is: {} bit",
            fmt.bits_per_sample
        ));
    }

    problems
}
