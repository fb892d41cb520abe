//! 调度领域模块：同一份分段任务逻辑的两种调度基底，契约都是「并发跑 N 个任务，全部终态后返回」。

pub mod dispatch;
pub mod structs;
pub mod structured_tasks;
pub mod thread_pool;
