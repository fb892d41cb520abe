//! 下载器领域模块：分段下载编排器与整文件基线下载。
//!
//! 使用方式：`SegmentedDownloader::new(url).save_to(path).concurrency(4).send().await`
//! 对外导出以 [`crate::downloader`] 为准，此处仅做模块划分，不重复 pub use。

pub mod run_segmented;
pub mod single_download;
pub mod structs;
