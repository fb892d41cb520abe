pub mod resource_metadata;

// 重导出公共类型
pub use resource_metadata::ResourceMetadata;
