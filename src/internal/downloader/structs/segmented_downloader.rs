//! 分段下载器
//!
//! 本模块实现单个远程资源的分段并发下载：按字节区间切分、并发抓取、重组为一个输出文件。
//!
//! ## 功能特性
//!
//! - **两种写入策略**：`DirectSeek`（共享文件直接定位写）与 `PartMerge`（分段临时文件后合并）
//! - **两种调度基底**：`ThreadPool`（有界工作线程）与 `StructuredTasks`（结构化 tokio 任务）
//! - **逐调用独立**：每次 `send()` 自建 HTTP 客户端与调度器，不持有任何跨调用的进程级状态
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use range_fetch::SegmentedDownloader;
//! # use range_fetch::downloader::{WriteStrategy, ExecutorKind};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let outcome = SegmentedDownloader::new("http://localhost:8080/file.bin")
//!     .save_to("file.bin")
//!     .concurrency(4)
//!     .write_strategy(WriteStrategy::PartMerge)
//!     .executor(ExecutorKind::ThreadPool)
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## 策略选择
//!
//! - 大小未知或服务器不支持 Range 时，`send()` 快速失败而不是悄悄退化成单段下载；
//!   需要整文件下载请直接用 [`crate::download_whole`]。
//! - 任一分段失败即整体失败；在途的兄弟分段不会被主动取消，但其结果会被丢弃，
//!   已写出的内容不会被当作成功产物。

use std::path::{Path, PathBuf};

use crate::internal::downloader::run_segmented::{RunSegmentedParams, run_segmented_download};
use crate::internal::executor::structs::executor_kind::ExecutorKind;
use crate::internal::write::structs::write_strategy::WriteStrategy;

use super::download_outcome::DownloadOutcome;
use super::error::DownloadError;

/// 默认并发度（分段数）。
const DEFAULT_CONCURRENCY: usize = 8;

/// 分段下载器。不实现 Clone，是因为一次下载对应一个输出产物，
/// 克隆会导致多份下载器同时写同一个文件，损坏文件内容。
#[derive(Debug)]
pub struct SegmentedDownloader {
    url: String,
    save_path: Option<PathBuf>,
    concurrency: usize,
    write_strategy: WriteStrategy,
    executor: ExecutorKind,
}

impl SegmentedDownloader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            save_path: None,
            concurrency: DEFAULT_CONCURRENCY,
            write_strategy: WriteStrategy::default(),
            executor: ExecutorKind::default(),
        }
    }

    /// 设置保存路径；不调用则 `send()` 返回 `NoDestination`。
    /// 父目录须由调用方提前建好，下载器不负责建目录。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        self.save_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// 设置并发度（分段数），会被钳到 `>= 1`；实际段数还会被资源大小封顶。
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// 设置写入策略，默认 `DirectSeek`。
    pub fn write_strategy(mut self, strategy: WriteStrategy) -> Self {
        self.write_strategy = strategy;
        self
    }

    /// 设置调度基底，默认 `StructuredTasks`。
    pub fn executor(mut self, executor: ExecutorKind) -> Self {
        self.executor = executor;
        self
    }

    /// 执行下载：探测 → 分段 → 并发抓取 → 收尾。
    ///
    /// 每次调用独立可重复：自建 HTTP 客户端与调度器，返回时不泄漏句柄、线程或任务。
    pub async fn send(self) -> Result<DownloadOutcome, DownloadError> {
        let save_path = self.save_path.ok_or(DownloadError::NoDestination)?;

        run_segmented_download(RunSegmentedParams {
            url: self.url,
            save_path,
            concurrency: self.concurrency,
            write_strategy: self.write_strategy,
            executor: self.executor,
        })
        .await
    }
}
