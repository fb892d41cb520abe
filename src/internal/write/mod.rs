//! 写入领域模块：把一段字节落到产物中的两种互斥策略，以及合并收尾逻辑。

pub mod merge_parts;
pub mod structs;
