//! 分段任务：一段区间 + 来源 URL + 落点，执行期间由单个工作单元独占。

use reqwest::Client;

use crate::internal::downloader::structs::error::DownloadError;
use crate::internal::partition::structs::byte_range::ByteRange;
use crate::internal::segment::fetch_segment::{FetchSegmentParams, fetch_segment};
use crate::internal::write::structs::write_target::WriteTarget;

/// 单个分段任务。编排器在派发前创建，任务结束（成功或失败）即销毁。
///
/// `run` 与调度基底无关：线程池工作线程 `block_on` 它，
/// 结构化任务直接 `spawn` 它，抓取与写入逻辑不重复实现。
#[derive(Debug)]
pub struct SegmentJob {
    pub url: String,
    pub range: ByteRange,
    pub target: WriteTarget,
}

impl SegmentJob {
    /// 执行本段：打开落点、抓取区间、收尾，返回写入的字节数。
    ///
    /// 空段（total_size == 0 时唯一的一段）不发起请求，只建出空产物。
    pub async fn run(self, client: &Client) -> Result<u64, DownloadError> {
        let mut sink = self.target.open().await?;

        if self.range.is_empty() {
            sink.finish().await?;
            return Ok(0);
        }

        let written = fetch_segment(FetchSegmentParams {
            client,
            url: &self.url,
            range: &self.range,
            sink: &mut sink,
        })
        .await?;

        sink.finish().await?;
        Ok(written)
    }
}
