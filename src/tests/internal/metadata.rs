//! 元数据探测测试：各种响应头组合与传输层失败路径。

use url::Url;

use crate::downloader::DownloadError;
use crate::metadata::probe_metadata;
use crate::tests::{TestServer, random_payload};

#[tokio::test]
async fn probe_reads_size_and_range_support() {
    let payload = random_payload(1_234);
    let server = TestServer::start(payload).await;
    let client = reqwest::Client::new();

    let url = Url::parse(&server.url("/file.bin")).unwrap();
    let meta = probe_metadata(&client, &url).await.unwrap();

    assert_eq!(meta.total_size, Some(1_234));
    assert!(meta.supports_ranges);
    assert!(meta.segmentable());
}

#[tokio::test]
async fn probe_is_consistent_across_calls() {
    let payload = random_payload(4_096);
    let server = TestServer::start(payload).await;
    let client = reqwest::Client::new();
    let url = Url::parse(&server.url("/file.bin")).unwrap();

    let first = probe_metadata(&client, &url).await.unwrap();
    let second = probe_metadata(&client, &url).await.unwrap();
    assert_eq!(first, second, "同一资源两次探测结果应一致");
}

#[tokio::test]
async fn probe_missing_length_header_yields_unknown_size() {
    let payload = random_payload(512);
    let server = TestServer::start(payload).await;
    let client = reqwest::Client::new();

    let url = Url::parse(&server.url("/no-length.bin")).unwrap();
    let meta = probe_metadata(&client, &url).await.unwrap();

    // 大小未知是哨兵值，不是错误
    assert_eq!(meta.total_size, None);
    assert!(meta.supports_ranges);
    assert!(!meta.segmentable());
}

#[tokio::test]
async fn probe_missing_accept_ranges_header() {
    let payload = random_payload(512);
    let server = TestServer::start(payload).await;
    let client = reqwest::Client::new();

    let url = Url::parse(&server.url("/no-ranges.bin")).unwrap();
    let meta = probe_metadata(&client, &url).await.unwrap();

    assert_eq!(meta.total_size, Some(512));
    assert!(!meta.supports_ranges);
    assert!(!meta.segmentable());
}

#[tokio::test]
async fn probe_unreachable_host_propagates_error() {
    // 绑一个端口再放掉，拿到一个必然拒绝连接的地址
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = reqwest::Client::new();
    let url = Url::parse(&format!("http://{addr}/file.bin")).unwrap();

    let err = probe_metadata(&client, &url).await.unwrap_err();
    assert!(matches!(err, DownloadError::Request(_)), "传输层错误应向上传播: {err}");
}
