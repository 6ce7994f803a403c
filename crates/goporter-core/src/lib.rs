//! GoPorter Core Library
//!
//! GoPro 存储卡媒体搬运的核心实现库：单次扫描源目录，
//! 把照片/音频/视频复制到目标目录，代理片段 (.lrv) 按剪辑软件
//! 约定重命名后放入代理子目录。
//!
//! # 模块
//!
//! - **media**: 扩展名分类、代理格式、GL→GX 重命名
//! - **transfer**: 传输执行器、进度回调、阶段状态机
//! - **config**: 路径和代理格式的持久化设置
//!
//! # 使用示例
//!
//! ```ignore
//! use std::sync::Arc;
//! use goporter_core::{ChannelCallback, ProxyFormat, TransferRequest, TransferRunner};
//!
//! let request = TransferRequest {
//!     source_dir: "/media/gopro/DCIM/100GOPRO".into(),
//!     destination_dir: "/home/user/footage".into(),
//!     proxy_format: ProxyFormat::DaVinci,
//! };
//!
//! let runner = Arc::new(TransferRunner::new());
//! let (callback, mut events) = ChannelCallback::new();
//!
//! // 后台执行，前端消费 events 渲染进度
//! let handle = {
//!     let runner = runner.clone();
//!     tokio::spawn(async move { runner.run(&request, &callback).await })
//! };
//!
//! // 随时可取消: runner.cancel()
//! let outcome = handle.await??;
//! println!("copied={} skipped={}", outcome.copied, outcome.skipped);
//! ```

pub mod config;
pub mod error;
pub mod media;
pub mod transfer;

// Config re-exports
pub use config::AppSettings;

// Error re-exports
pub use error::TransferError;

// Media re-exports
pub use media::{FileClassification, ProxyFormat};

// Transfer re-exports
pub use transfer::{
    ChannelCallback, TransferCallback, TransferEvent, TransferOutcome, TransferPhase,
    TransferRequest, TransferRunner,
};
