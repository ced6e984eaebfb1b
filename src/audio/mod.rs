//! 音频输入模块
//!
//! 格式描述与校验、定长帧读取，以及基于hound的WAV容器接入。

pub mod format;
pub mod frame_reader;
pub mod wav_source;

pub use format::{ByteOrder, Encoding, FormatDescriptor, ProblemReport, validate};
pub use frame_reader::FrameReader;
pub use wav_source::{WavFrameReader, open_wav};
