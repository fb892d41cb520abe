/// 调度基底：封闭的两种变体，在构建下载器时选定，一次调用内绝不混用。
///
/// 两种基底对外行为一致：分段完成顺序不做任何保证，
/// 唯一的汇合保证是「全部任务到达终态后调用才返回」。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutorKind {
    /// 有界工作线程池：每个分段一个被 scope 管住的 OS 线程，
    /// 调用返回前线程全部确定性回收，不留陈旧工作线程。
    ThreadPool,
    /// 结构化协作任务：每个分段一个 tokio 任务，全部 JoinHandle 等完才返回，
    /// 不留任何游离的后台任务。
    #[default]
    StructuredTasks,
}
