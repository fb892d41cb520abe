//! 写入目标：一段字节最终落点的描述，由编排器创建、分段任务独占使用。

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncSeekExt;

use crate::internal::downloader::structs::error::DownloadError;

use super::segment_sink::SegmentSink;

/// 一段字节的落点。
///
/// 每个分段任务持有自己的 `WriteTarget`，打开自己的文件句柄；
/// 句柄绝不跨任务共享，定位与写入天然按任务串行。
#[derive(Debug, Clone)]
pub enum WriteTarget {
    /// 直接定位：共享输出文件 + 本段起始偏移（文件已由编排器预先撑到总大小）
    Direct { path: PathBuf, offset: u64 },
    /// 分段临时文件：本段专属路径，顺序写入
    Part { path: PathBuf },
}

impl WriteTarget {
    /// 第 `index` 段对应的临时文件路径：`"{dest}.part{index}"`。
    pub fn part_path(dest: &Path, index: usize) -> PathBuf {
        let mut name = dest.as_os_str().to_os_string();
        name.push(format!(".part{index}"));
        PathBuf::from(name)
    }

    /// 打开落点，返回可顺序写入的 sink。
    ///
    /// - `Direct`：以写模式打开共享文件并定位到 `offset`（只定位一次，之后顺序写）；
    /// - `Part`：创建本段专属的临时文件。
    pub async fn open(&self) -> Result<SegmentSink, DownloadError> {
        match self {
            WriteTarget::Direct { path, offset } => {
                let mut file = OpenOptions::new()
                    .write(true)
                    .open(path)
                    .await
                    .map_err(DownloadError::CreateFile)?;
                file.seek(SeekFrom::Start(*offset))
                    .await
                    .map_err(DownloadError::SeekFile)?;
                Ok(SegmentSink::new(file))
            }
            WriteTarget::Part { path } => {
                let file = File::create(path)
                    .await
                    .map_err(DownloadError::CreateFile)?;
                Ok(SegmentSink::new(file))
            }
        }
    }
}
