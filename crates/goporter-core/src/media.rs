//! 媒体文件分类与代理片段重命名
//!
//! GoPro 存储卡根目录下的文件按扩展名（不区分大小写）分为三类：
//!
//! - 普通媒体 (`.jpg` / `.wav` / `.mp4`): 原样复制到目标根目录
//! - 代理片段 (`.lrv`): 重命名为 `.mov` 后复制到代理子目录
//! - 其他: 忽略
//!
//! 代理片段的文件名带 `GL` 标签，对应的全分辨率片段带 `GX` 标签。
//! 剪辑软件按文件名匹配代理，因此重命名时做 GL→GX 替换。

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 普通媒体扩展名（小写，不含点）
pub const MEDIA_EXTENSIONS: [&str; 3] = ["jpg", "wav", "mp4"];

/// 代理片段的原始扩展名
pub const PROXY_EXT_ORIGINAL: &str = "lrv";

/// 代理片段重命名后的扩展名
pub const PROXY_EXT_TARGET: &str = "mov";

/// 代理格式枚举
///
/// 决定代理子目录名称，以及是否传输代理片段。
/// 持久化为整数 (0=None, 1=DaVinci, 2=Adobe)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(into = "u8", from = "u8")]
pub enum ProxyFormat {
    #[default]
    None = 0,
    DaVinci = 1,
    Adobe = 2,
}

impl ProxyFormat {
    /// 获取显示名称
    pub fn name(&self) -> &'static str {
        match self {
            ProxyFormat::None => "None",
            ProxyFormat::DaVinci => "DaVinci Resolve",
            ProxyFormat::Adobe => "Adobe Premiere",
        }
    }

    /// 代理子目录名称（None 时不使用子目录）
    pub fn subfolder(&self) -> Option<&'static str> {
        match self {
            ProxyFormat::None => None,
            ProxyFormat::DaVinci => Some("Proxy"),
            ProxyFormat::Adobe => Some("Proxies"),
        }
    }

    /// 从 ID 值创建（未知值回退到 None）
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => ProxyFormat::DaVinci,
            2 => ProxyFormat::Adobe,
            _ => ProxyFormat::None,
        }
    }

    /// 获取 ID 值
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

impl From<ProxyFormat> for u8 {
    fn from(format: ProxyFormat) -> Self {
        format.id()
    }
}

impl From<u8> for ProxyFormat {
    fn from(id: u8) -> Self {
        ProxyFormat::from_id(id)
    }
}

/// 单个源文件的分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClassification {
    /// 普通媒体，原样复制到目标根目录
    PlainMedia,
    /// 代理片段，重命名后复制到代理子目录
    ProxyClip,
    /// 不识别的扩展名，或代理格式为 None 时的代理片段
    Ignored,
}

/// 按文件名分类
pub fn classify(file_name: &str, proxy_format: ProxyFormat) -> FileClassification {
    let Some(ext) = extension(file_name) else {
        return FileClassification::Ignored;
    };

    if MEDIA_EXTENSIONS.contains(&ext.as_str()) {
        FileClassification::PlainMedia
    } else if ext == PROXY_EXT_ORIGINAL && proxy_format != ProxyFormat::None {
        FileClassification::ProxyClip
    } else {
        FileClassification::Ignored
    }
}

/// 文件是否计入进度条总数
///
/// 进度条的分母是所有媒体相关扩展名的文件数，包含 `.mov`
/// （存储卡上可能已有重命名过的代理片段）。
pub fn is_counted(file_name: &str) -> bool {
    match extension(file_name) {
        Some(ext) => {
            MEDIA_EXTENSIONS.contains(&ext.as_str())
                || ext == PROXY_EXT_ORIGINAL
                || ext == PROXY_EXT_TARGET
        }
        None => false,
    }
}

/// 计算代理片段重命名后的文件名
///
/// 规则：全部转小写，`gl` 子串替换为 `gx`，扩展名 `.lrv` 换成
/// `.mov`，最后整体转大写（GoPro 的文件名约定是全大写）。
///
/// `GL010042.lrv` → `GX010042.MOV`；不含 GL 标签的
/// `GH010042.LRV` → `GH010042.MOV`。
pub fn proxy_target_name(file_name: &str) -> String {
    let lowered = file_name.to_lowercase().replace("gl", "gx");
    let renamed = match lowered.strip_suffix(".lrv") {
        Some(stem) => format!("{stem}.{PROXY_EXT_TARGET}"),
        None => lowered,
    };
    renamed.to_uppercase()
}

/// 提取小写扩展名（不含点）
fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
