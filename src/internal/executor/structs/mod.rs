pub mod executor_kind;

// 重导出公共类型
pub use executor_kind::ExecutorKind;
