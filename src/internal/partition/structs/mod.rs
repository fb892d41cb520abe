pub mod byte_range;

// 重导出公共类型
pub use byte_range::ByteRange;
