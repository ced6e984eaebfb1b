//! 统一错误处理框架
//!
//! 核心错误类型定义。核心算法的前置条件违规（帧长度非法等）属于调用契约破坏，
//! 以 `assert!` 处理，不在此枚举中。

use crate::audio::ProblemReport;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// 音频处理相关的统一错误类型
#[derive(Debug)]
pub enum AudioError {
    /// 输入验证错误（命令行参数、路径不可读等）
    InvalidInput(String),

    /// 输入文件不存在或无法打开
    UnreadableInput(PathBuf, io::Error),

    /// 结果输出文件写入失败
    OutputError(PathBuf, io::Error),

    /// 文件I/O错误
    IoError(io::Error),

    /// 容器格式错误（非WAV、头部损坏等）
    FormatError(String),

    /// 解码错误
    DecodingError(String),

    /// 格式校验未通过（携带全部问题描述）
    UnsupportedFormat(ProblemReport),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::InvalidInput(msg) => write!(f, "输入验证失败: {msg}"),
            AudioError::UnreadableInput(path, err) => {
                write!(f, "无法读取输入文件 {}: {err}", path.display())
            }
            AudioError::OutputError(path, err) => {
                write!(f, "无法写入输出文件 {}: {err}", path.display())
            }
            AudioError::IoError(err) => write!(f, "文件I/O错误: {err}"),
            AudioError::FormatError(msg) => write!(f, "音频格式错误: {msg}"),
            AudioError::DecodingError(msg) => write!(f, "音频解码失败: {msg}"),
            AudioError::UnsupportedFormat(problems) => {
                write!(f, "不支持的音频格式: {}", problems.join(" "))
            }
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::UnreadableInput(_, err)
            | AudioError::OutputError(_, err)
            | AudioError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AudioError {
    fn from(err: io::Error) -> Self {
        AudioError::IoError(err)
    }
}

/// hound只用于解析WAV头部：头部读取中途遇到的I/O错误（多为文件截断）归为格式错误
impl From<hound::Error> for AudioError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io_err) => {
                AudioError::FormatError(format!("WAV头部不完整: {io_err}"))
            }
            hound::Error::FormatError(msg) => {
                AudioError::FormatError(format!("WAV格式错误: {msg}"))
            }
            hound::Error::Unsupported => AudioError::FormatError(
                "不支持的WAV子格式 / Unsupported WAV sub-format".to_string(),
            ),
            other => AudioError::DecodingError(format!("WAV解码错误: {other}")),
        }
    }
}

/// 音频处理操作的标准Result类型
pub type AudioResult<T> = Result<T, AudioError>;

// ==================== 错误转换Helper函数 ====================

/// 创建格式错误的helper函数
#[inline]
pub fn format_error<E: fmt::Display>(context: &str, err: E) -> AudioError {
    AudioError::FormatError(format!("{context}: {err}"))
}

/// 创建解码错误的helper函数
#[inline]
pub fn decoding_error<E: fmt::Display>(context: &str, err: E) -> AudioError {
    AudioError::DecodingError(format!("{context}: {err}"))
}

// ==================== 错误分类系统 ====================

/// 错误类别枚举（用于退出码映射和建议文本）
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ErrorCategory {
    /// 格式相关错误（不支持的格式、格式损坏等）
    Format,
    /// 解码相关错误（数据截断、样本读取失败等）
    Decoding,
    /// I/O相关错误（文件不存在、权限不足等）
    Io,
    /// 其他未分类错误
    Other,
}

impl ErrorCategory {
    /// 从AudioError提取错误类别
    pub fn from_audio_error(e: &AudioError) -> Self {
        match e {
            AudioError::FormatError(_) | AudioError::UnsupportedFormat(_) => Self::Format,
            AudioError::DecodingError(_) => Self::Decoding,
            AudioError::UnreadableInput(..)
            | AudioError::OutputError(..)
            | AudioError::IoError(_) => Self::Io,
            AudioError::InvalidInput(_) => Self::Other,
        }
    }

    /// 获取错误类别的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Format => "格式错误",
            Self::Decoding => "解码错误",
            Self::Io => "I/O错误",
            Self::Other => "其他错误",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let unsupported = AudioError::UnsupportedFormat(vec!["x".to_string()]);
        assert_eq!(
            ErrorCategory::from_audio_error(&unsupported),
            ErrorCategory::Format
        );

        let io = AudioError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(ErrorCategory::from_audio_error(&io), ErrorCategory::Io);

        let decoding = decoding_error("读取帧失败", "eof");
        assert_eq!(
            ErrorCategory::from_audio_error(&decoding),
            ErrorCategory::Decoding
        );
        assert_eq!(decoding.to_string(), "音频解码失败: 读取帧失败: eof");
    }

    #[test]
    fn test_hound_io_error_is_header_format_error() {
        let err = AudioError::from(hound::Error::IoError(io::Error::other(
            "Failed to read enough bytes.",
        )));
        assert!(matches!(err, AudioError::FormatError(_)));
        assert_eq!(ErrorCategory::from_audio_error(&err), ErrorCategory::Format);
    }

    #[test]
    fn test_path_errors_keep_source() {
        let unreadable = AudioError::UnreadableInput(
            PathBuf::from("take.wav"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(std::error::Error::source(&unreadable).is_some());
        assert_eq!(ErrorCategory::from_audio_error(&unreadable), ErrorCategory::Io);

        let output = AudioError::OutputError(
            PathBuf::from("/readonly/report.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(output.to_string().contains("/readonly/report.txt"));
        assert_eq!(ErrorCategory::from_audio_error(&output), ErrorCategory::Io);
    }

    #[test]
    fn test_unsupported_format_display_joins_problems() {
        let err = AudioError::UnsupportedFormat(vec!["a.".to_string(), "b.".to_string()]);
        assert_eq!(err.to_string(), "不支持的音频格式: a. b.");
    }
}
