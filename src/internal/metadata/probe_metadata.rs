//! 元数据探测：HEAD 请求读取总大小与 Range 支持声明，不拉取响应体。

use reqwest::Client;
use reqwest::header::{ACCEPT_RANGES, CONTENT_LENGTH};
use tracing::debug;
use url::Url;

use crate::internal::downloader::structs::error::DownloadError;

use super::structs::resource_metadata::ResourceMetadata;

/// 探测远程资源元数据。
///
/// - 连接失败、主机不可达等传输层错误直接向上传播（不吞掉）；
/// - `Content-Length` 缺失或不是合法非负整数时返回 `total_size: None`，不视为错误；
/// - `Accept-Ranges` 的值必须恰好为 `bytes` 才认为支持 Range。
pub async fn probe_metadata(
    client: &Client,
    url: &Url,
) -> Result<ResourceMetadata, DownloadError> {
    let resp = client.head(url.clone()).send().await?;

    let total_size = resp
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok());

    let supports_ranges = resp
        .headers()
        .get(ACCEPT_RANGES)
        .and_then(|v| v.to_str().ok())
        .map(|s| s == "bytes")
        .unwrap_or(false);

    debug!(
        url = %url,
        total_size = ?total_size,
        supports_ranges,
        "元数据探测完成"
    );

    Ok(ResourceMetadata {
        total_size,
        supports_ranges,
    })
}
