//! 单线程整文件下载：不分段的基线路径，仅作对照与整文件场景使用。

use std::path::Path;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use super::structs::error::DownloadError;

/// 整文件下载：一次不带 Range 的 GET，流式写入目标路径，返回写入的字节数。
///
/// 非成功状态码在创建目标文件之前就失败，失败时不产生任何文件。
pub async fn download_whole(
    url: &str,
    save_path: impl AsRef<Path>,
) -> Result<u64, DownloadError> {
    let url = Url::parse(url)?;
    let client = reqwest::Client::new();

    let resp = client.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(DownloadError::HttpStatus(resp.status()));
    }

    let mut file = File::create(save_path.as_ref())
        .await
        .map_err(DownloadError::CreateFile)?;

    let mut stream = resp.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(DownloadError::Request)?;
        file.write_all(&chunk)
            .await
            .map_err(DownloadError::WriteFile)?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(DownloadError::FlushFile)?;
    debug!(url = %url, written, "整文件下载完成");
    Ok(written)
}
