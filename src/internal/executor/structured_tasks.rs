//! 结构化任务基底：每个分段一个 tokio 任务，逐个等待 JoinHandle，不留游离任务。

use reqwest::Client;

use crate::internal::downloader::structs::error::DownloadError;
use crate::internal::segment::structs::segment_job::SegmentJob;

/// 并发执行全部分段任务，按任务顺序返回各自结果。
///
/// 每个任务克隆一份本次调用专属的 HTTP 客户端；
/// 任务 panic 以 `TaskJoin` 呈现，不拖垮其余任务的汇合。
pub async fn run_jobs(
    client: &Client,
    jobs: Vec<SegmentJob>,
) -> Vec<Result<u64, DownloadError>> {
    let mut handles = Vec::with_capacity(jobs.len());
    for job in jobs {
        let client = client.clone();
        handles.push(tokio::spawn(async move { job.run(&client).await }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(DownloadError::TaskJoin(join_err)),
        });
    }
    results
}
