//! 分段抓取：执行单段 Range 下载的编排——请求、流式读块、逐块写入 sink。

use futures_util::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::internal::downloader::structs::error::DownloadError;
use crate::internal::partition::structs::byte_range::ByteRange;
use crate::internal::write::structs::segment_sink::SegmentSink;

use super::range_request::{FetchRangeParams, fetch_range_response};

/// 执行单段 Range 下载时的参数（形参超过 3 个时用 struct 承载）。
pub struct FetchSegmentParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub range: &'a ByteRange,
    pub sink: &'a mut SegmentSink,
}

/// 执行单段 Range 下载：流式读取响应体，每块立即写入 sink。
///
/// 内存占用由块大小 × 并发数决定，与段大小无关；
/// 任何退出路径上响应与连接都随 drop 关闭。
pub async fn fetch_segment(params: FetchSegmentParams<'_>) -> Result<u64, DownloadError> {
    let resp = fetch_range_response(FetchRangeParams {
        client: params.client,
        url: params.url,
        range: params.range,
    })
    .await?;

    let mut stream = resp.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(DownloadError::Request)?;
        if chunk.is_empty() {
            continue;
        }
        params.sink.write_chunk(&chunk).await?;
        written += chunk.len() as u64;
    }

    debug!(
        index = params.range.index,
        start = params.range.start,
        written,
        "分段抓取完成"
    );
    Ok(written)
}
