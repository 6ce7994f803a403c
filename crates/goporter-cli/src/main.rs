//! GoPorter CLI
//!
//! GoPro 存储卡媒体搬运的命令行前端：复制照片/音频/视频到
//! 目标目录，代理片段按剪辑软件约定重命名。
//!
//! 路径和代理格式会被记住，下次运行可以不带参数：
//!
//! ```bash
//! goporter run --source /media/gopro/DCIM/100GOPRO --dest ~/footage --format davinci
//! goporter run   # 沿用上次的设置
//! ```
//!
//! 传输中按 Ctrl-C 取消（当前文件复制完后停止）。

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use goporter_core::{
    AppSettings, ChannelCallback, ProxyFormat, TransferEvent, TransferRequest, TransferRunner,
};

#[derive(Parser)]
#[command(name = "goporter", version, about = "GoPro 媒体搬运 - 复制媒体文件并重命名代理片段")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 执行一次传输
    Run {
        /// 源目录（默认沿用上次保存的路径）
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// 目标目录
        #[arg(short, long)]
        dest: Option<PathBuf>,
        /// 代理格式
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// 查看当前设置
    Config,
}

/// 命令行上的代理格式
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// 不传输代理片段
    None,
    /// DaVinci Resolve（子目录 "Proxy"）
    Davinci,
    /// Adobe Premiere（子目录 "Proxies"）
    Adobe,
}

impl From<FormatArg> for ProxyFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::None => ProxyFormat::None,
            FormatArg::Davinci => ProxyFormat::DaVinci,
            FormatArg::Adobe => ProxyFormat::Adobe,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 桥接 log crate（goporter-core 使用）到 tracing
    let _ = tracing_log::LogTracer::init();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            source,
            dest,
            format,
        } => run_transfer(source, dest, format).await,
        Commands::Config => show_config(),
    }
}

async fn run_transfer(
    source: Option<PathBuf>,
    dest: Option<PathBuf>,
    format: Option<FormatArg>,
) -> Result<()> {
    let mut settings = AppSettings::load();
    if let Some(source) = source {
        settings.source_path = source;
    }
    if let Some(dest) = dest {
        settings.destination_path = dest;
    }
    if let Some(format) = format {
        settings.proxy_format = format.into();
    }

    if settings.source_path.as_os_str().is_empty() {
        bail!("未设置源目录，使用 --source 指定");
    }
    if settings.destination_path.as_os_str().is_empty() {
        bail!("未设置目标目录，使用 --dest 指定");
    }

    // 传输开始时保存设置，下次运行可以不带参数
    settings.save().context("保存设置失败")?;

    println!("📤 {} -> {}", settings.source_path.display(), settings.destination_path.display());
    println!("   代理格式: {}", settings.proxy_format.name());

    let request = TransferRequest {
        source_dir: settings.source_path.clone(),
        destination_dir: settings.destination_path.clone(),
        proxy_format: settings.proxy_format,
    };

    let runner = Arc::new(TransferRunner::new());
    let (callback, mut events) = ChannelCallback::new();

    let handle = {
        let runner = runner.clone();
        tokio::spawn(async move { runner.run(&request, &callback).await })
    };

    // Ctrl-C 触发协作式取消（相当于参考实现的取消按钮）
    {
        let runner = runner.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                println!("\n⏹️  取消中，等待当前文件复制完成...");
                runner.cancel();
            }
        });
    }

    // 回调随执行器结束被丢弃，通道关闭后循环退出
    while let Some(event) = events.recv().await {
        match event {
            TransferEvent::Status(status) => println!("   {status}"),
            TransferEvent::Progress { current, total } => {
                tracing::debug!("progress {current}/{total}");
            }
            TransferEvent::Phase(phase) => tracing::debug!("phase: {phase:?}"),
            TransferEvent::Complete(_) | TransferEvent::Error(_) => {}
        }
    }

    let outcome = handle.await?.context("传输失败")?;

    if outcome.canceled {
        println!("⏹️  已取消: 复制 {} 个, 跳过 {} 个", outcome.copied, outcome.skipped);
    } else {
        println!("✅ 完成: 复制 {} 个, 跳过 {} 个", outcome.copied, outcome.skipped);
    }

    Ok(())
}

fn show_config() -> Result<()> {
    let settings = AppSettings::load();
    println!("配置文件: {}", AppSettings::config_path().display());
    println!("源目录:   {}", settings.source_path.display());
    println!("目标目录: {}", settings.destination_path.display());
    println!("代理格式: {}", settings.proxy_format.name());
    Ok(())
}
