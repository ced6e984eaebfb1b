//! 样本解码器
//!
//! 将一帧交错的小端补码PCM字节解码为每声道一个 `i32`。
//! 1-4字节位宽统一使用"高位对齐 + 算术右移"完成符号扩展，不按位宽分支。

use crate::tools::constants::decoding::MAX_SAMPLE_BYTES;

/// 一帧解码结果：每声道一个符号扩展后的样本值，按声道顺序排列
pub type SampleFrame = Vec<i32>;

/// 解码单个小端补码样本（1-4字节）
///
/// 样本字节被放到4字节小端缓冲区的高位端、低位补零，按 `i32` 解释后
/// 算术右移 `(4 - width) * 8` 位，原样本的符号位即成为 `i32` 的符号位。
///
/// # Panics
///
/// 位宽为0或超过4字节时panic（调用契约破坏，应由格式校验提前拦截）
#[inline]
pub fn decode_sample(bytes: &[u8]) -> i32 {
    let width = bytes.len();
    assert!(
        (1..=MAX_SAMPLE_BYTES).contains(&width),
        "样本位宽必须为1-{MAX_SAMPLE_BYTES}字节，实际: {width}"
    );

    let mut buf = [0u8; MAX_SAMPLE_BYTES];
    buf[MAX_SAMPLE_BYTES - width..].copy_from_slice(bytes);
    i32::from_le_bytes(buf) >> ((MAX_SAMPLE_BYTES - width) * 8)
}

/// 将一帧字节解码到调用方提供的缓冲区（热路径，无分配）
///
/// # Panics
///
/// * 帧为空，或帧长度不能被声道数整除
/// * 每声道字节数超过4
/// * `out.len() != channel_count`
#[inline]
pub fn decode_frame_into(frame_bytes: &[u8], channel_count: usize, out: &mut [i32]) {
    assert!(!frame_bytes.is_empty(), "帧不能为空");
    assert!(channel_count > 0, "声道数必须大于0");
    assert!(
        frame_bytes.len() >= channel_count && frame_bytes.len() % channel_count == 0,
        "帧长度({})必须是声道数({channel_count})的整数倍",
        frame_bytes.len()
    );
    assert_eq!(out.len(), channel_count, "输出缓冲区长度必须等于声道数");

    let sample_size = frame_bytes.len() / channel_count;
    assert!(
        sample_size <= MAX_SAMPLE_BYTES,
        "每声道字节数({sample_size})超过{MAX_SAMPLE_BYTES}"
    );

    for (slot, sample_bytes) in out.iter_mut().zip(frame_bytes.chunks_exact(sample_size)) {
        *slot = decode_sample(sample_bytes);
    }
}

/// 解码一帧，返回新分配的 [`SampleFrame`]
pub fn decode_frame(frame_bytes: &[u8], channel_count: usize) -> SampleFrame {
    let mut frame = vec![0; channel_count];
    decode_frame_into(frame_bytes, channel_count, &mut frame);
    frame
}
