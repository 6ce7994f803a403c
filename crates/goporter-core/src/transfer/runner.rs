//! 传输执行器
//!
//! 单次遍历源目录：普通媒体复制到目标根目录，代理片段重命名后
//! 复制到代理子目录，目标已存在的文件跳过（重复运行是幂等的）。
//!
//! # 取消语义
//!
//! 取消是协作式的，每个文件开始前检查一次；正在进行的复制
//! 会完整结束，之后才停止。已处理文件的计数保留在结果里。
//!
//! # 错误语义
//!
//! 首个复制错误中止整个传输（不跳过继续），
//! 错误里带上失败的文件路径。

use filetime::FileTime;
use log::{debug, info};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use tokio::fs;

use super::{TransferCallback, TransferOutcome, TransferPhase, TransferRequest};
use crate::error::TransferError;
use crate::media::{self, FileClassification};

/// 传输执行器
///
/// 持有阶段状态机和取消标志。同一个执行器可以串行复用，
/// 但 [`TransferPhase::Running`] 期间拒绝第二次启动。
pub struct TransferRunner {
    phase: AtomicU8,
    cancel: AtomicBool,
}

impl Default for TransferRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferRunner {
    pub fn new() -> Self {
        Self {
            phase: AtomicU8::new(TransferPhase::Idle.id()),
            cancel: AtomicBool::new(false),
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> TransferPhase {
        TransferPhase::from_id(self.phase.load(Ordering::SeqCst))
    }

    /// 请求取消当前传输
    ///
    /// 传输中时阶段切到 Canceling；空闲时调用无效果
    /// （下一次 run 会重置标志）。
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
        let _ = self.phase.compare_exchange(
            TransferPhase::Running.id(),
            TransferPhase::Canceling.id(),
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }

    /// 执行一次传输
    ///
    /// 进度和状态通过 `callback` 上报；返回最终计数。
    /// 已有传输在进行时立即返回 [`TransferError::AlreadyRunning`]。
    pub async fn run<C: TransferCallback>(
        &self,
        request: &TransferRequest,
        callback: &C,
    ) -> Result<TransferOutcome, TransferError> {
        self.begin()?;
        callback.on_phase(TransferPhase::Running);

        let result = self.execute(request, callback).await;

        self.phase
            .store(TransferPhase::Done.id(), Ordering::SeqCst);

        match &result {
            Ok(outcome) => callback.on_complete(outcome),
            Err(e) => callback.on_error(&e.to_string()),
        }
        callback.on_phase(TransferPhase::Done);

        result
    }

    /// 阶段门卫：只允许从 Idle 或 Done 启动
    fn begin(&self) -> Result<(), TransferError> {
        for from in [TransferPhase::Idle, TransferPhase::Done] {
            if self
                .phase
                .compare_exchange(
                    from.id(),
                    TransferPhase::Running.id(),
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
                .is_ok()
            {
                self.cancel.store(false, Ordering::SeqCst);
                return Ok(());
            }
        }
        Err(TransferError::AlreadyRunning)
    }

    async fn execute<C: TransferCallback>(
        &self,
        request: &TransferRequest,
        callback: &C,
    ) -> Result<TransferOutcome, TransferError> {
        let source = request.source_dir.as_path();
        let destination = request.destination_dir.as_path();

        // 前置条件：两个目录都必须存在，否则不做任何 I/O
        if !source.is_dir() {
            return Err(TransferError::InvalidPath(source.to_path_buf()));
        }
        if !destination.is_dir() {
            return Err(TransferError::InvalidPath(destination.to_path_buf()));
        }

        // 枚举第一层普通文件，按文件名排序保证输出顺序确定
        let mut file_names = Vec::new();
        let mut entries = fs::read_dir(source).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                file_names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        file_names.sort();

        let total = file_names.iter().filter(|n| media::is_counted(n)).count() as u64;
        let mut current: u64 = 0;
        callback.on_progress(current, total);

        info!(
            "transfer start: {} -> {} ({} files, proxy format {})",
            source.display(),
            destination.display(),
            total,
            request.proxy_format.name()
        );

        // 代理子目录（格式为 None 时完全不创建）
        let proxy_dir = request
            .proxy_format
            .subfolder()
            .map(|name| destination.join(name));
        if let Some(dir) = &proxy_dir {
            fs::create_dir_all(dir).await?;
        }

        let mut outcome = TransferOutcome::default();

        for file_name in file_names {
            if self.cancel.load(Ordering::SeqCst) {
                info!(
                    "transfer canceled: {} copied, {} skipped",
                    outcome.copied, outcome.skipped
                );
                callback.on_status("Copy operation canceled.");
                outcome.canceled = true;
                return Ok(outcome);
            }

            let counted = media::is_counted(&file_name);

            let target = match media::classify(&file_name, request.proxy_format) {
                FileClassification::PlainMedia => Some(destination.join(&file_name)),
                FileClassification::ProxyClip => proxy_dir
                    .as_ref()
                    .map(|dir| dir.join(media::proxy_target_name(&file_name))),
                FileClassification::Ignored => None,
            };

            let Some(target) = target else {
                debug!("ignoring {}", file_name);
                outcome.skipped += 1;
                if counted {
                    current += 1;
                    callback.on_progress(current, total);
                }
                continue;
            };

            if fs::try_exists(&target).await? {
                debug!("already exists: {}", target.display());
                outcome.skipped += 1;
                current += 1;
                callback.on_progress(current, total);
                callback.on_status(&format!("Skipping file {file_name} (already exists)"));
                continue;
            }

            let source_path = source.join(&file_name);
            let size = fs::metadata(&source_path)
                .await
                .map_err(|e| TransferError::Copy {
                    path: source_path.clone(),
                    source: e,
                })?
                .len();
            let size_mb = size as f64 / f64::from(1u32 << 20);

            // 状态行里显示的是目标文件名（代理片段已重命名）
            let shown = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_name.clone());
            callback.on_status(&format!("Copying file {shown} [{size_mb:.2} MB]"));

            copy_preserving(&source_path, &target)
                .await
                .map_err(|e| TransferError::Copy {
                    path: source_path.clone(),
                    source: e,
                })?;

            outcome.copied += 1;
            current += 1;
            callback.on_progress(current, total);
        }

        info!(
            "transfer complete: {} copied, {} skipped",
            outcome.copied, outcome.skipped
        );
        callback.on_status(&format!(
            "Copy operation complete. Copied {} files. Skipped {} files.",
            outcome.copied, outcome.skipped
        ));

        Ok(outcome)
    }
}

/// 复制文件并保留元数据
///
/// 权限位由 `fs::copy` 本身保留，修改/访问时间复制后回写。
async fn copy_preserving(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::copy(source, target).await?;

    let metadata = fs::metadata(source).await?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, atime, mtime)?;

    Ok(())
}
