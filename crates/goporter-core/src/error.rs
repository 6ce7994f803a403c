//! 传输错误类型
//!
//! 传输采用"首个错误即中止"的语义：任何复制失败都会中断
//! 剩余的扫描，错误里显式标出失败的文件。

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// 源目录或目标目录不存在（前置条件失败，未做任何 I/O）
    #[error("directory does not exist: {0}")]
    InvalidPath(PathBuf),

    /// 同一时刻只允许一次传输
    #[error("a transfer is already in progress")]
    AlreadyRunning,

    /// 复制单个文件失败，整个传输中止
    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 目录枚举、子目录创建等其他文件系统错误
    #[error(transparent)]
    Io(#[from] io::Error),
}
