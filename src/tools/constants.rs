//! 常量和默认配置集中管理
//!
//! 将所有重要常量集中定义，避免"默认值漂移"和重复定义

/// 掉线检测算法常量
pub mod dropout {
    /// 游程阈值：与前一样本相同的次数**超过**该值（即≥5次）才视为掉线
    pub const RUN_THRESHOLD: u32 = 4;
}

/// 报告合并常量
pub mod report {
    /// 去抖窗口（秒）：与上一条已报告记录的间隔必须大于该值
    pub const DEBOUNCE_WINDOW_SECONDS: f64 = 1.0;

    /// "上一次报告时间"的初始哨兵值，保证第一条记录一定被报告
    pub const INITIAL_LAST_REPORTED_SECONDS: f64 = -2.0;

    /// 没有任何掉线时输出的单行结果
    pub const NO_DROPOUTS_MESSAGE: &str = "No Dropouts Detected.";
}

/// 样本解码常量
pub mod decoding {
    /// 单个样本的最大字节数（解码目标为 i32）
    pub const MAX_SAMPLE_BYTES: usize = 4;
}

/// 支持的输入格式
pub mod supported {
    /// 采样率（Hz），必须精确相等
    pub const SAMPLE_RATES_HZ: [f32; 2] = [44100.0, 48000.0];

    /// 声道数：单声道或立体声
    pub const CHANNEL_COUNTS: [u16; 2] = [1, 2];

    /// 位深度
    pub const BITS_PER_SAMPLE: [u16; 2] = [16, 24];
}

/// 面向用户的固定提示
pub mod messages {
    /// 输入文件不可读
    pub const CANNOT_READ_FILE: &str = "Cannot read file.  Are the path and name correct?";
}
