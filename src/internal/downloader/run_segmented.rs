//! 分段下载编排：探测 → 分段 → 并发抓取 → 收尾，任一阶段失败即整体失败。

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tracing::{debug, info};
use url::Url;

use crate::internal::executor::dispatch::{DispatchJobsParams, dispatch_jobs};
use crate::internal::executor::structs::executor_kind::ExecutorKind;
use crate::internal::metadata::probe_metadata::probe_metadata;
use crate::internal::partition::partition_ranges::partition_ranges;
use crate::internal::partition::structs::byte_range::ByteRange;
use crate::internal::segment::structs::segment_job::SegmentJob;
use crate::internal::write::merge_parts::{MergePartsParams, discard_parts, merge_parts};
use crate::internal::write::structs::write_strategy::WriteStrategy;
use crate::internal::write::structs::write_target::WriteTarget;

use super::structs::download_outcome::DownloadOutcome;
use super::structs::download_phase::DownloadPhase;
use super::structs::error::DownloadError;

/// 分段下载编排参数（形参超过 3 个时用 struct 承载）。
pub struct RunSegmentedParams {
    pub url: String,
    pub save_path: PathBuf,
    pub concurrency: usize,
    pub write_strategy: WriteStrategy,
    pub executor: ExecutorKind,
}

/// 分段下载入口。
///
/// 本函数拥有本次调用的全部状态：HTTP 客户端、分段任务、文件句柄都在这里创建、
/// 在返回前销毁；绝不持有跨调用的进程级池化状态，保证重复调用彼此独立。
pub(crate) async fn run_segmented_download(
    params: RunSegmentedParams,
) -> Result<DownloadOutcome, DownloadError> {
    // 先解析 URL，坏 URL 在产生任何文件系统副作用之前失败
    let url = Url::parse(&params.url)?;
    let client = reqwest::Client::new();

    info!(phase = %DownloadPhase::Probing, url = %url, "开始分段下载");
    let meta = probe_metadata(&client, &url).await?;
    if !meta.supports_ranges {
        return Err(DownloadError::RangeNotSupported);
    }
    // 大小未知时快速失败，不悄悄退化成单段下载
    let total = meta.total_size.ok_or(DownloadError::UnknownTotalSize)?;

    info!(phase = %DownloadPhase::Partitioning, total, concurrency = params.concurrency, "计算分段区间");
    let ranges = partition_ranges(total, params.concurrency);

    // DirectSeek：派发前把共享输出文件预先撑到总大小；句柄随即释放，
    // 之后每个任务打开自己的句柄，区间互不重叠
    if params.write_strategy == WriteStrategy::DirectSeek {
        let file = File::create(&params.save_path)
            .await
            .map_err(DownloadError::CreateFile)?;
        file.set_len(total)
            .await
            .map_err(DownloadError::PreallocateFile)?;
    }

    let part_paths = part_paths_for(&params.save_path, params.write_strategy, &ranges);
    let jobs = build_jobs(BuildJobsParams {
        url: &url,
        save_path: &params.save_path,
        write_strategy: params.write_strategy,
        ranges: &ranges,
        part_paths: &part_paths,
    });

    info!(phase = %DownloadPhase::Fetching, segments = jobs.len(), executor = ?params.executor, "并发抓取各段");
    let results = dispatch_jobs(DispatchJobsParams {
        kind: params.executor,
        client: &client,
        jobs,
    })
    .await;

    // 汇合点归约：按任务顺序取第一个错误，其余结果丢弃
    let mut bytes_written: u64 = 0;
    let mut first_error: Option<DownloadError> = None;
    for result in results {
        match result {
            Ok(written) => bytes_written += written,
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if let Some(err) = first_error {
        // 失败的下载绝不产出合并产物；DirectSeek 的半成品文件保持未完成状态留在原地
        if params.write_strategy == WriteStrategy::PartMerge {
            discard_parts(&part_paths).await;
        }
        return Err(err);
    }

    info!(phase = %DownloadPhase::Finalizing, bytes_written, "全部分段完成，开始收尾");
    if params.write_strategy == WriteStrategy::PartMerge {
        match merge_parts(MergePartsParams {
            dest: &params.save_path,
            part_paths: &part_paths,
        })
        .await
        {
            Ok(merged) => debug!(merged, "合并完成"),
            Err(e) => {
                discard_parts(&part_paths).await;
                return Err(e);
            }
        }
    }

    Ok(DownloadOutcome {
        bytes_written,
        segment_count: ranges.len(),
    })
}

/// PartMerge 时每段的临时文件路径；DirectSeek 没有任何中间文件。
fn part_paths_for(
    save_path: &Path,
    strategy: WriteStrategy,
    ranges: &[ByteRange],
) -> Vec<PathBuf> {
    match strategy {
        WriteStrategy::DirectSeek => Vec::new(),
        WriteStrategy::PartMerge => ranges
            .iter()
            .map(|r| WriteTarget::part_path(save_path, r.index))
            .collect(),
    }
}

/// 组装分段任务时的参数（形参超过 3 个时用 struct 承载）。
struct BuildJobsParams<'a> {
    url: &'a Url,
    save_path: &'a Path,
    write_strategy: WriteStrategy,
    ranges: &'a [ByteRange],
    part_paths: &'a [PathBuf],
}

/// 每个区间组装一个任务：区间 + 来源 URL + 按策略决定的落点。
fn build_jobs(params: BuildJobsParams<'_>) -> Vec<SegmentJob> {
    params
        .ranges
        .iter()
        .map(|range| {
            let target = match params.write_strategy {
                WriteStrategy::DirectSeek => WriteTarget::Direct {
                    path: params.save_path.to_path_buf(),
                    offset: range.start,
                },
                WriteStrategy::PartMerge => WriteTarget::Part {
                    path: params.part_paths[range.index].clone(),
                },
            };
            SegmentJob {
                url: params.url.to_string(),
                range: *range,
                target,
            }
        })
        .collect()
}
