/// 单次分段下载的结果；失败走 `Err(DownloadError)`，不在这里表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// 全部分段写入的字节总数（应等于资源总大小）
    pub bytes_written: u64,
    /// 实际派发的分段数（并发度被资源大小封顶后）
    pub segment_count: usize,
}
