//! 单段字节区间：`[start, end)`，end 为不含上界。

/// 资源中的一段连续字节区间。各段按 `index` 升序 = 偏移升序，不重叠且连续覆盖 `[0, total)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// 该段在全部分段中的序号（0 起）
    pub index: usize,
    /// 起始偏移（字节）
    pub start: u64,
    /// 结束偏移（字节，不含上界）
    pub end: u64,
}

impl ByteRange {
    /// 该段长度（字节）。
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// 是否为空段（仅 total_size == 0 时出现）。
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// 生成 Range 请求头的值：`bytes=start-(end-1)`。空段不应发起请求，由调用方保证。
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end.saturating_sub(1))
    }
}
