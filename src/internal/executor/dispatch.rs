//! 调度入口：按选定基底派发分段任务，屏蔽两种基底的差异。

use reqwest::Client;

use crate::internal::downloader::structs::error::DownloadError;
use crate::internal::segment::structs::segment_job::SegmentJob;

use super::structs::executor_kind::ExecutorKind;
use super::{structured_tasks, thread_pool};

/// 派发分段任务时的参数（形参超过 3 个时用 struct 承载）。
pub struct DispatchJobsParams<'a> {
    pub kind: ExecutorKind,
    pub client: &'a Client,
    pub jobs: Vec<SegmentJob>,
}

/// 用选定基底并发执行全部分段任务；返回时每个任务都已到达终态。
///
/// 结果按任务顺序排列，编排器只依赖「全部完成」这一汇合条件，
/// 绝不依赖完成顺序。
pub async fn dispatch_jobs(
    params: DispatchJobsParams<'_>,
) -> Vec<Result<u64, DownloadError>> {
    match params.kind {
        ExecutorKind::ThreadPool => thread_pool::run_jobs(params.jobs).await,
        ExecutorKind::StructuredTasks => {
            structured_tasks::run_jobs(params.client, params.jobs).await
        }
    }
}
