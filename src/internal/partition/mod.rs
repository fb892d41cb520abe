//! 分段领域模块：把已知的总大小切成连续不重叠的字节区间。

pub mod partition_ranges;
pub mod structs;
