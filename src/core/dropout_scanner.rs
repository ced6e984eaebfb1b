//! 掉线扫描器
//!
//! 单次前向扫描，逐声道跟踪"与前一样本相同"的连续次数。连续相同次数超过阈值、
//! 且随后出现不同值时，在观察到变化的样本位置产生一条 [`Dropout`]。
//! 持续到流末尾仍未中断的游程不会被报告。

use crate::tools::constants::dropout::RUN_THRESHOLD;
use serde::Serialize;

/// 一次检测到的掉线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dropout {
    /// 游程被打断时的样本序号（从1开始，即已处理的样本帧数）
    pub sample_position: u64,
    /// 声道索引（从0开始）
    pub channel: usize,
    /// 与前一样本相同的连续次数
    pub consecutive_count: u32,
}

/// 扫描结束时的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    /// 已处理的样本帧数
    pub samples_processed: u64,
    /// 在流末尾仍未中断、且已超过阈值的游程数（不报告）
    pub open_runs_over_threshold: usize,
}

/// 流式掉线扫描器
///
/// 状态只有前一帧和每声道的游程计数，内存占用为 O(声道数)。
#[derive(Debug, Clone)]
pub struct DropoutScanner {
    previous: Vec<i32>,
    run_lengths: Vec<u32>,
    sample_index: u64,
}

impl DropoutScanner {
    /// 创建扫描器
    ///
    /// # Panics
    ///
    /// 声道数为0时panic
    pub fn new(channel_count: usize) -> Self {
        assert!(channel_count > 0, "声道数必须大于0");
        Self {
            previous: vec![0; channel_count],
            run_lengths: vec![0; channel_count],
            sample_index: 0,
        }
    }

    /// 声道数
    pub fn channel_count(&self) -> usize {
        self.run_lengths.len()
    }

    /// 已处理的样本帧数
    pub fn samples_processed(&self) -> u64 {
        self.sample_index
    }

    /// 推入一帧，将新检测到的掉线追加到 `dropouts`，返回本帧产生的条数
    ///
    /// 第一帧只作为比较基准（序号1），不参与游程计数。
    ///
    /// # Panics
    ///
    /// 帧的声道数与扫描器不一致时panic
    pub fn push_frame(&mut self, frame: &[i32], dropouts: &mut Vec<Dropout>) -> usize {
        assert_eq!(
            frame.len(),
            self.channel_count(),
            "帧声道数与扫描器不一致"
        );

        self.sample_index += 1;
        if self.sample_index == 1 {
            self.previous.copy_from_slice(frame);
            return 0;
        }

        let before = dropouts.len();
        for (channel, ((&current, previous), run)) in frame
            .iter()
            .zip(self.previous.iter_mut())
            .zip(self.run_lengths.iter_mut())
            .enumerate()
        {
            if current == *previous {
                *run += 1;
            } else {
                if *run > RUN_THRESHOLD {
                    dropouts.push(Dropout {
                        sample_position: self.sample_index,
                        channel,
                        consecutive_count: *run,
                    });
                }
                *run = 0;
            }
            *previous = current;
        }

        dropouts.len() - before
    }

    /// 结束扫描，丢弃未中断的游程
    pub fn finish(self) -> ScanStats {
        ScanStats {
            samples_processed: self.sample_index,
            open_runs_over_threshold: self
                .run_lengths
                .iter()
                .filter(|&&run| run > RUN_THRESHOLD)
                .count(),
        }
    }
}

/// 对一组帧执行完整扫描，返回按检测顺序排列的掉线列表
pub fn scan<I, F>(frames: I, channel_count: usize) -> Vec<Dropout>
where
    I: IntoIterator<Item = F>,
    F: AsRef<[i32]>,
{
    let mut scanner = DropoutScanner::new(channel_count);
    let mut dropouts = Vec::new();
    for frame in frames {
        scanner.push_frame(frame.as_ref(), &mut dropouts);
    }
    dropouts
}
