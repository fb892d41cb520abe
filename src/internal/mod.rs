//! 内部模块划分：探测、分段、抓取、写入、调度各自独立成域，由 downloader 编排。

pub mod downloader;
pub mod executor;
pub mod metadata;
pub mod partition;
pub mod segment;
pub mod write;
