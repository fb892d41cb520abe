//! 分段写入 sink：包一层文件句柄，顺序接收字节块。

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::internal::downloader::structs::error::DownloadError;

/// 单个分段任务的写入端；任务独占，不跨任务共享。
#[derive(Debug)]
pub struct SegmentSink {
    file: File,
}

impl SegmentSink {
    pub(crate) fn new(file: File) -> Self {
        Self { file }
    }

    /// 顺序写入一块数据；落点（共享文件内偏移或 part 文件）由打开时决定。
    pub async fn write_chunk(&mut self, chunk: &Bytes) -> Result<(), DownloadError> {
        self.file
            .write_all(chunk)
            .await
            .map_err(DownloadError::WriteFile)
    }

    /// 收尾：刷新并关闭句柄。所有退出路径都应走到这里或直接 drop。
    pub async fn finish(mut self) -> Result<(), DownloadError> {
        self.file.flush().await.map_err(DownloadError::FlushFile)
    }
}
