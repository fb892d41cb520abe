/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口：分段下载器与整文件基线下载
pub use internal::downloader::single_download::download_whole;
pub use internal::downloader::structs::segmented_downloader::SegmentedDownloader;

pub mod metadata {
    use crate::internal;
    pub use internal::metadata::probe_metadata::probe_metadata;
    pub use internal::metadata::structs::resource_metadata::ResourceMetadata;
}

pub mod partition {
    use crate::internal;
    pub use internal::partition::partition_ranges::partition_ranges;
    pub use internal::partition::structs::byte_range::ByteRange;
}

/// 对外提供下载器领域类型，不能限制死在入口结构体中，以防有人自己要组合
pub mod downloader {
    use crate::internal;
    pub use internal::downloader::structs::download_outcome::DownloadOutcome;
    pub use internal::downloader::structs::download_phase::DownloadPhase;
    pub use internal::downloader::structs::error::DownloadError;
    pub use internal::executor::structs::executor_kind::ExecutorKind;
    pub use internal::write::structs::write_strategy::WriteStrategy;
}

pub mod segment {
    use crate::internal;
    pub use internal::segment::structs::segment_job::SegmentJob;
    pub use internal::write::structs::write_target::WriteTarget;
}
