use std::fmt;

/// 下载流程阶段（编排器内部推进，日志可见）；任一阶段失败即 `Err` 返回，终态不再单列。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadPhase {
    /// 探测元数据（HEAD）
    Probing,
    /// 计算分段区间
    Partitioning,
    /// 并发抓取各段
    Fetching,
    /// 收尾（PartMerge 合并清理；DirectSeek 无事可做）
    Finalizing,
}

impl fmt::Display for DownloadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DownloadPhase::Probing => "probing",
            DownloadPhase::Partitioning => "partitioning",
            DownloadPhase::Fetching => "fetching",
            DownloadPhase::Finalizing => "finalizing",
        };
        f.write_str(s)
    }
}
