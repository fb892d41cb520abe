pub mod segment_sink;
pub mod write_strategy;
pub mod write_target;

// 重导出公共类型
pub use segment_sink::SegmentSink;
pub use write_strategy::WriteStrategy;
pub use write_target::WriteTarget;
