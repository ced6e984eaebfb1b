//! WAV容器接入
//!
//! 基于hound库解析RIFF/WAVE头部，得到格式描述后交出定位在data块起点的原始字节流，
//! 由 [`FrameReader`] 按帧切分。样本值本身不经过hound解码。
//! 帧长度取fmt块中的 block_align，即容器声明的值。

use super::format::{ByteOrder, Encoding, FormatDescriptor};
use super::frame_reader::FrameReader;
use crate::error::{self, AudioError, AudioResult};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, Take};
use std::path::Path;

/// WAV data块上的帧读取器类型
pub type WavFrameReader = FrameReader<Take<BufReader<File>>>;

/// 打开WAV文件，返回格式描述和帧读取器
///
/// # 错误
///
/// * `AudioError::UnreadableInput` - 文件不存在或无法打开
/// * `AudioError::FormatError` - 非WAV容器、头部损坏或被截断
pub fn open_wav<P: AsRef<Path>>(path: P) -> AudioResult<(FormatDescriptor, WavFrameReader)> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| AudioError::UnreadableInput(path.to_path_buf(), e))?;
    let mut buffered = BufReader::new(file);

    let block_align = read_block_align(&mut buffered)?;
    buffered.rewind()?;

    let reader = hound::WavReader::new(buffered)?;
    let spec = reader.spec();

    let channels = spec.channels.max(1);
    if block_align == 0 || block_align % channels != 0 {
        return Err(error::format_error(
            "block_align与声道数不匹配",
            format!("block_align={block_align}, channels={}", spec.channels),
        ));
    }

    let format = FormatDescriptor {
        frame_size_bytes: block_align as usize,
        ..descriptor_from_spec(&spec)
    };

    // hound的len()是全部声道的样本总数，每样本占 block_align / channels 字节
    let data_len = reader.len() as u64 * (block_align / channels) as u64;
    let frames = FrameReader::new(reader.into_inner().take(data_len), format.frame_size_bytes);

    Ok((format, frames))
}

/// 读取fmt块中的 block_align（每帧字节数）
///
/// RIFF头部交给hound校验，之后逐块跳过直到fmt块。
fn read_block_align<R: Read>(reader: &mut R) -> AudioResult<u16> {
    hound::read_wave_header(reader)?;

    loop {
        let mut header = [0u8; 8];
        reader
            .read_exact(&mut header)
            .map_err(|e| error::format_error("WAV中缺少fmt块", e))?;
        let chunk_len = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as u64;

        if &header[..4] == b"fmt " {
            // format_tag(2) channels(2) sample_rate(4) byte_rate(4) block_align(2)
            let mut fmt = [0u8; 14];
            reader
                .read_exact(&mut fmt)
                .map_err(|e| error::format_error("fmt块不完整", e))?;
            return Ok(u16::from_le_bytes([fmt[12], fmt[13]]));
        }

        // 块按偶数字节对齐
        let skip = chunk_len + (chunk_len & 1);
        let skipped = io::copy(&mut (&mut *reader).take(skip), &mut io::sink())?;
        if skipped < skip {
            return Err(error::format_error("WAV中缺少fmt块", "意外的文件结尾"));
        }
    }
}

/// 将hound的WavSpec映射为格式描述（帧长度按紧凑存储推导）
///
/// RIFF WAV恒为小端；8位整型WAV按惯例为无符号。
pub fn descriptor_from_spec(spec: &hound::WavSpec) -> FormatDescriptor {
    let encoding = match spec.sample_format {
        hound::SampleFormat::Float => Encoding::PcmFloat,
        hound::SampleFormat::Int if spec.bits_per_sample <= 8 => Encoding::PcmUnsigned,
        hound::SampleFormat::Int => Encoding::PcmSigned,
    };

    FormatDescriptor {
        encoding,
        byte_order: ByteOrder::Little,
        sample_rate_hz: spec.sample_rate as f32,
        channel_count: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        frame_size_bytes: spec.channels as usize * (spec.bits_per_sample as usize).div_ceil(8),
    }
}
