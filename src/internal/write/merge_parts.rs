//! PartMerge 收尾：按序号升序把 part 文件拼进目标文件并删除；失败时只做清理。

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::internal::downloader::structs::error::DownloadError;

/// 合并 part 文件时的参数（形参超过 3 个时用 struct 承载）。
pub struct MergePartsParams<'a> {
    pub dest: &'a Path,
    pub part_paths: &'a [PathBuf],
}

/// 按序号升序把所有 part 文件拼接进目标文件，每拼完一个就删除它。
///
/// 只能在全部分段任务成功到达终态之后调用（屏障语义，由编排器保证）。
pub async fn merge_parts(params: MergePartsParams<'_>) -> Result<u64, DownloadError> {
    let mut dest = File::create(params.dest)
        .await
        .map_err(DownloadError::CreateFile)?;

    let mut merged: u64 = 0;
    for part in params.part_paths {
        let mut src = File::open(part)
            .await
            .map_err(DownloadError::OpenPartFile)?;
        merged += tokio::io::copy(&mut src, &mut dest)
            .await
            .map_err(DownloadError::WriteFile)?;
        tokio::fs::remove_file(part)
            .await
            .map_err(DownloadError::RemovePartFile)?;
        debug!(part = %part.display(), "已合并并删除 part 文件");
    }

    dest.flush().await.map_err(DownloadError::FlushFile)?;
    Ok(merged)
}

/// 丢弃所有 part 文件（任一分段失败或合并失败时的清理路径）。
///
/// 部分 part 可能从未创建，`NotFound` 不视为错误；其余删除失败只记录，不覆盖原始错误。
pub async fn discard_parts(part_paths: &[PathBuf]) {
    for part in part_paths {
        match tokio::fs::remove_file(part).await {
            Ok(()) => debug!(part = %part.display(), "已丢弃 part 文件"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => debug!(part = %part.display(), error = %e, "丢弃 part 文件失败"),
        }
    }
}
