//! 文件传输模块
//!
//! 包含:
//! - 传输请求/结果类型
//! - 阶段状态机 (Idle → Running → Canceling → Done)
//! - 进度回调接口和事件通道适配器
//! - 传输执行器

pub mod progress;
pub mod runner;

pub use progress::{ChannelCallback, TransferCallback, TransferEvent};
pub use runner::TransferRunner;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::media::ProxyFormat;

/// 一次传输请求
///
/// 由前端构造，传输期间不可变。
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// 源目录（只枚举第一层，不递归）
    pub source_dir: PathBuf,
    /// 目标目录
    pub destination_dir: PathBuf,
    /// 代理格式
    pub proxy_format: ProxyFormat,
}

/// 传输结果统计
///
/// 每次运行时重置；取消后保留已处理文件的部分计数。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// 实际复制的文件数
    pub copied: u64,
    /// 跳过的文件数（目标已存在 + 被忽略的文件）
    pub skipped: u64,
    /// 是否被取消（部分计数仍然有效）
    pub canceled: bool,
}

/// 传输阶段状态机
///
/// 把"同一时刻只有一次传输"的假设显式化，
/// Running 期间拒绝第二次启动。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransferPhase {
    #[default]
    Idle = 0,
    Running = 1,
    Canceling = 2,
    Done = 3,
}

impl TransferPhase {
    /// 从 ID 值创建
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => TransferPhase::Running,
            2 => TransferPhase::Canceling,
            3 => TransferPhase::Done,
            _ => TransferPhase::Idle,
        }
    }

    /// 获取 ID 值
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// 是否正在进行中
    pub fn is_busy(&self) -> bool {
        matches!(self, TransferPhase::Running | TransferPhase::Canceling)
    }
}
