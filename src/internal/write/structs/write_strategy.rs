/// 写入策略：封闭的两种变体，在构建下载器时选定，不支持外部扩展。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
    /// 单个共享输出文件预先撑到总大小，各段用独立句柄定位到自己的偏移后写入；
    /// 区间互不重叠，内容层面无需互斥，也不产生任何中间文件。
    #[default]
    DirectSeek,
    /// 各段顺序写入自己专属的临时文件（`"{dest}.part{index}"`），
    /// 全部成功后按序号升序拼接进目标文件并删除所有 part 文件。
    PartMerge,
}
