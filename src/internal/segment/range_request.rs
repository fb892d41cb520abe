//! 分段抓取：发起单段 Range 请求，校验 206 后返回响应供流式读取。

use reqwest::header::RANGE;
use reqwest::{Client, Response, StatusCode};

use crate::internal::downloader::structs::error::DownloadError;
use crate::internal::partition::structs::byte_range::ByteRange;

/// 发起 Range 请求时的参数（形参超过 3 个时用 struct 承载）。
pub struct FetchRangeParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub range: &'a ByteRange,
}

/// 发起单段 Range GET 请求，返回响应体供调用方做 `bytes_stream()`。
///
/// 服务器必须以 206 应答；其他任何状态码都是 `RangeRejected`，
/// 对本段致命且不重试。
pub async fn fetch_range_response(
    params: FetchRangeParams<'_>,
) -> Result<Response, DownloadError> {
    let resp = params
        .client
        .get(params.url)
        .header(RANGE, params.range.header_value())
        .send()
        .await?;

    if resp.status() != StatusCode::PARTIAL_CONTENT {
        return Err(DownloadError::RangeRejected {
            status: resp.status(),
        });
    }
    Ok(resp)
}
