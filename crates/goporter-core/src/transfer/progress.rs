//! 传输进度回调
//!
//! 执行器不直接操作任何界面状态，所有进度通过回调上报，
//! 前端（CLI/GUI）自行决定渲染方式。

use tokio::sync::mpsc;

use super::{TransferOutcome, TransferPhase};

/// 传输进度回调
pub trait TransferCallback: Send + Sync {
    /// 阶段变化（前端据此切换按钮/界面状态）
    fn on_phase(&self, phase: TransferPhase);
    /// 进度更新（current/total 对应确定型进度条）
    fn on_progress(&self, current: u64, total: u64);
    /// 单个文件的状态行
    fn on_status(&self, status: &str);
    /// 传输结束（完成或取消后都会调用，带最终计数）
    fn on_complete(&self, outcome: &TransferOutcome);
    /// 传输失败
    fn on_error(&self, error: &str);
}

/// 传输事件
#[derive(Debug, Clone)]
pub enum TransferEvent {
    Phase(TransferPhase),
    Progress { current: u64, total: u64 },
    Status(String),
    Complete(TransferOutcome),
    Error(String),
}

/// 基于通道的回调实现
///
/// 事件按发生顺序送入 mpsc 通道，接收端满时丢弃（进度事件
/// 允许丢失，最终的 Complete/Error 由执行器的返回值兜底）。
pub struct ChannelCallback {
    tx: mpsc::Sender<TransferEvent>,
}

impl ChannelCallback {
    pub fn new() -> (Self, mpsc::Receiver<TransferEvent>) {
        let (tx, rx) = mpsc::channel(64);
        (Self { tx }, rx)
    }
}

impl TransferCallback for ChannelCallback {
    fn on_phase(&self, phase: TransferPhase) {
        let _ = self.tx.try_send(TransferEvent::Phase(phase));
    }

    fn on_progress(&self, current: u64, total: u64) {
        let _ = self.tx.try_send(TransferEvent::Progress { current, total });
    }

    fn on_status(&self, status: &str) {
        let _ = self.tx.try_send(TransferEvent::Status(status.to_string()));
    }

    fn on_complete(&self, outcome: &TransferOutcome) {
        let _ = self.tx.try_send(TransferEvent::Complete(outcome.clone()));
    }

    fn on_error(&self, error: &str) {
        let _ = self.tx.try_send(TransferEvent::Error(error.to_string()));
    }
}
