//! 元数据探测领域模块：只发 HEAD 请求，不传输任何响应体。

pub mod probe_metadata;
pub mod structs;
