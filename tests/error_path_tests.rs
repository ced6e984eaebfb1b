//! 错误路径和格式拒绝测试
//!
//! 验证不可读文件、非WAV容器以及各类不支持格式的处理：
//! 格式问题一次性全部列出，且不进入扫描。


use audio_test_fixtures::{mono, write_float_wav, write_int_wav};
use dropout_detector::error::{AudioError, ErrorCategory};
use dropout_detector::tools::{AnalysisOutput, analyze_file};
use std::path::Path;

fn expect_problems(result: Result<AnalysisOutput, AudioError>) -> Vec<String> {
    match result {
        Err(AudioError::UnsupportedFormat(problems)) => problems,
        Err(e) => panic!("期望格式拒绝，实际错误: {e:?}"),
        Ok(_) => panic!("期望格式拒绝，实际分析成功"),
    }
}

#[test]
fn test_nonexistent_file_error() {
    let result = analyze_file(Path::new("/nonexistent/take.wav"));
    match result {
        Err(e @ AudioError::UnreadableInput(..)) => {
            assert_eq!(ErrorCategory::from_audio_error(&e), ErrorCategory::Io);
        }
        other => panic!("错误类型不正确，期望输入不可读错误，实际: {other:?}"),
    }
}

#[test]
fn test_non_wav_container_error() {
    let path = std::env::temp_dir().join(format!(
        "dropout_detector_{}_fake.wav",
        std::process::id()
    ));
    std::fs::write(&path, b"This is not an audio file").unwrap();

    let result = analyze_file(&path);
    let _ = std::fs::remove_file(&path);

    let err = result.unwrap_err();
    assert_eq!(ErrorCategory::from_audio_error(&err), ErrorCategory::Format);
    assert!(!matches!(err, AudioError::UnsupportedFormat(_)));
}

/// 文件存在且可读，但WAV头部在读取中途结束：属于格式错误，而非路径错误
#[test]
fn test_truncated_header_is_format_error() {
    let path = std::env::temp_dir().join(format!(
        "dropout_detector_{}_truncated_header.wav",
        std::process::id()
    ));
    std::fs::write(&path, b"RIFF\x10\x00").unwrap();

    let result = analyze_file(&path);
    let _ = std::fs::remove_file(&path);

    match result {
        Err(e @ AudioError::FormatError(_)) => {
            assert_eq!(ErrorCategory::from_audio_error(&e), ErrorCategory::Format);
        }
        other => panic!("期望格式错误，实际: {other:?}"),
    }
}

#[test]
fn test_unsupported_sample_rate() {
    let fixture = write_int_wav("rate_22050", 22050, 16, &mono(&[1, 2, 3, 4]));
    let problems = expect_problems(analyze_file(fixture.path()));
    assert_eq!(
        problems,
        vec!["File sample rate must be 44.1kHz or 48kHz.  This file is: 22050.0Hz".to_string()]
    );
}

#[test]
fn test_unsupported_bit_depth_32() {
    let fixture = write_int_wav("bits_32", 48000, 32, &mono(&[1, 2, 3, 4]));
    let problems = expect_problems(analyze_file(fixture.path()));
    assert_eq!(
        problems,
        vec!["File must be a 16 bit or 24 bit recording.  This file is: 32 bit".to_string()]
    );
}

#[test]
fn test_eight_bit_is_unsigned_and_wrong_depth() {
    let fixture = write_int_wav("bits_8", 44100, 8, &mono(&[1, 2, 3, 4]));
    let problems = expect_problems(analyze_file(fixture.path()));
    assert_eq!(problems.len(), 2);
    assert!(problems[0].ends_with("This file is: PCM_UNSIGNED"));
    assert!(problems[1].ends_with("This file is: 8 bit"));
}

#[test]
fn test_float_wav_rejected() {
    let fixture = write_float_wav("float_32", 48000, 2, 64);
    let problems = expect_problems(analyze_file(fixture.path()));
    assert_eq!(problems.len(), 2);
    assert!(problems[0].contains("PCM_FLOAT"));
    assert!(problems[1].contains("32 bit"));
}

#[test]
fn test_multichannel_rejected() {
    let frames: Vec<Vec<i32>> = (0..16).map(|i| vec![i, -i, i * 2, -i * 2]).collect();
    let fixture = write_int_wav("quad", 44100, 16, &frames);
    let problems = expect_problems(analyze_file(fixture.path()));
    assert_eq!(
        problems,
        vec!["File must be mono or stereo.  This file has: 4 channels".to_string()]
    );
}

#[test]
fn test_all_problems_reported_together() {
    let frames: Vec<Vec<i32>> = (0..16).map(|i| vec![i, i, i]).collect();
    let fixture = write_int_wav("many_problems", 8000, 32, &frames);
    let problems = expect_problems(analyze_file(fixture.path()));
    assert_eq!(problems.len(), 3, "问题列表: {problems:?}");
}
