/// 一次下载尝试开始时探测到的远程资源元数据；探测后不再变化，也不落盘。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMetadata {
    /// 资源总字节数；响应头缺失或无法解析时为 `None`（调用方须回退到非分段策略，而不是报错）
    pub total_size: Option<u64>,
    /// 服务器是否声明支持 Range 请求（`Accept-Ranges: bytes`）
    pub supports_ranges: bool,
}

impl ResourceMetadata {
    /// 是否满足分段下载的前提：大小已知且支持 Range。
    pub fn segmentable(&self) -> bool {
        self.supports_ranges && self.total_size.is_some()
    }
}
