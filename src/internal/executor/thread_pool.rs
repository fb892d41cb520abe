//! 线程池基底：每个分段一个被 scope 管住的工作线程，各线程自带单线程运行时驱动同一份任务逻辑。

use crate::internal::downloader::structs::error::DownloadError;
use crate::internal::segment::structs::segment_job::SegmentJob;

/// 在有界工作线程上并发执行全部分段任务，按任务顺序返回各自结果。
///
/// 整个派发过程是阻塞的，包在 `spawn_blocking` 里供异步编排器等待；
/// `std::thread::scope` 保证返回前每个工作线程都已汇合，
/// 后续调用绝不会复用本次的工作线程。
pub async fn run_jobs(jobs: Vec<SegmentJob>) -> Vec<Result<u64, DownloadError>> {
    match tokio::task::spawn_blocking(move || run_jobs_blocking(jobs)).await {
        Ok(results) => results,
        Err(join_err) => vec![Err(DownloadError::TaskJoin(join_err))],
    }
}

/// 阻塞派发：池大小 = 任务数（任务数已被并发度封顶），一段一线程。
fn run_jobs_blocking(jobs: Vec<SegmentJob>) -> Vec<Result<u64, DownloadError>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| scope.spawn(move || run_one_job(job)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Err(DownloadError::WorkerPanic)))
            .collect()
    })
}

/// 单个工作线程：建自己的单线程运行时与 HTTP 客户端，`block_on` 共享的任务逻辑。
fn run_one_job(job: SegmentJob) -> Result<u64, DownloadError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DownloadError::BuildRuntime)?;

    runtime.block_on(async {
        let client = reqwest::Client::new();
        job.run(&client).await
    })
}
