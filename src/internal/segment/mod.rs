//! 分段抓取领域模块：单段 Range 请求与流式写入，任务逻辑与调度基底无关。

pub mod fetch_segment;
pub mod range_request;
pub mod structs;
