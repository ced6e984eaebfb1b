//! 定长帧读取器
//!
//! 从任意字节源按 `frame_size_bytes` 切出交错PCM帧。流末尾不足一帧的残余字节被忽略，
//! 其长度通过 [`FrameReader::truncated_tail_bytes`] 暴露给调用方。

use crate::error::{self, AudioResult};
use std::io::{ErrorKind, Read};

/// 定长帧读取器
///
/// 内部只保留一帧大小的缓冲区，内存占用与文件长度无关。
#[derive(Debug)]
pub struct FrameReader<R: Read> {
    reader: R,
    frame: Vec<u8>,
    frames_read: u64,
    truncated_tail: usize,
}

impl<R: Read> FrameReader<R> {
    /// 创建帧读取器
    ///
    /// # Panics
    ///
    /// `frame_size_bytes` 为0时panic（格式描述非法）
    pub fn new(reader: R, frame_size_bytes: usize) -> Self {
        assert!(frame_size_bytes > 0, "帧长度必须大于0");
        Self {
            reader,
            frame: vec![0; frame_size_bytes],
            frames_read: 0,
            truncated_tail: 0,
        }
    }

    /// 读取下一帧；流结束返回 `Ok(None)`
    pub fn next_frame(&mut self) -> AudioResult<Option<&[u8]>> {
        let filled = read_full(&mut self.reader, &mut self.frame)
            .map_err(|e| error::decoding_error("读取PCM帧失败", e))?;

        if filled == self.frame.len() {
            self.frames_read += 1;
            Ok(Some(&self.frame))
        } else {
            self.truncated_tail = filled;
            Ok(None)
        }
    }

    /// 帧长度（字节）
    pub fn frame_size_bytes(&self) -> usize {
        self.frame.len()
    }

    /// 已完整读取的帧数
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// 流末尾被丢弃的残余字节数（不足一帧）
    pub fn truncated_tail_bytes(&self) -> usize {
        self.truncated_tail
    }
}

/// 尽量填满缓冲区，返回实际读取的字节数（小于缓冲区长度即表示EOF）
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// 每次只返回1字节的读取器，模拟短读
    struct OneByteReader(Cursor<Vec<u8>>);

    impl Read for OneByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn test_reads_exact_frames() {
        let mut reader = FrameReader::new(Cursor::new(vec![1, 2, 3, 4, 5, 6]), 2);
        assert_eq!(reader.next_frame().unwrap(), Some(&[1u8, 2][..]));
        assert_eq!(reader.next_frame().unwrap(), Some(&[3u8, 4][..]));
        assert_eq!(reader.next_frame().unwrap(), Some(&[5u8, 6][..]));
        assert_eq!(reader.next_frame().unwrap(), None);
        assert_eq!(reader.frames_read(), 3);
        assert_eq!(reader.truncated_tail_bytes(), 0);
    }

    #[test]
    fn test_short_reads_are_reassembled() {
        let inner = OneByteReader(Cursor::new(vec![0x10, 0x20, 0x30, 0x40, 0x50, 0x60]));
        let mut reader = FrameReader::new(inner, 3);
        assert_eq!(reader.next_frame().unwrap(), Some(&[0x10u8, 0x20, 0x30][..]));
        assert_eq!(reader.next_frame().unwrap(), Some(&[0x40u8, 0x50, 0x60][..]));
        assert_eq!(reader.next_frame().unwrap(), None);
    }

    #[test]
    fn test_partial_tail_is_dropped() {
        let mut reader = FrameReader::new(Cursor::new(vec![1, 2, 3, 4, 5]), 4);
        assert!(reader.next_frame().unwrap().is_some());
        assert!(reader.next_frame().unwrap().is_none());
        assert_eq!(reader.frames_read(), 1);
        assert_eq!(reader.truncated_tail_bytes(), 1);
    }

    #[test]
    #[should_panic(expected = "帧长度必须大于0")]
    fn test_zero_frame_size_panics() {
        let _ = FrameReader::new(Cursor::new(Vec::new()), 0);
    }
}
