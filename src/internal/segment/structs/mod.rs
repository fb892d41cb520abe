pub mod segment_job;

// 重导出公共类型
pub use segment_job::SegmentJob;
