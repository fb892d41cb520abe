//! 测试模块入口：公共逻辑在 `fixture` 子模块（本地 Range 测试服务器），集成测试在 `internal`。

#[cfg(test)]
pub use fixture::*;

pub mod internal;
