//! 整文件基线下载测试：成功路径与「非成功状态不产生文件」。

use crate::download_whole;
use crate::downloader::DownloadError;
use crate::tests::{TestServer, random_payload};

#[tokio::test]
async fn whole_file_download_matches_payload() {
    let payload = random_payload(64_000);
    let server = TestServer::start(payload.clone()).await;
    let dir = tempfile::tempdir().unwrap();

    let dest = dir.path().join("whole.bin");
    let written = download_whole(&server.url("/file.bin"), &dest)
        .await
        .unwrap();

    assert_eq!(written, 64_000);
    assert_eq!(std::fs::read(&dest).unwrap(), *payload.as_ref());
}

#[tokio::test]
async fn non_success_status_creates_no_file() {
    let payload = random_payload(16);
    let server = TestServer::start(payload).await;
    let dir = tempfile::tempdir().unwrap();

    let dest = dir.path().join("never.bin");
    let err = download_whole(&server.url("/missing.bin"), &dest)
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::HttpStatus(s) if s.as_u16() == 404), "{err}");
    assert!(!dest.exists(), "非成功状态不应产生目标文件");
}

#[tokio::test]
async fn invalid_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("never.bin");

    let err = download_whole("::::", &dest).await.unwrap_err();
    assert!(matches!(err, DownloadError::InvalidUrl(_)), "{err}");
    assert!(!dest.exists());
}
