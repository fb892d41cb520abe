pub mod download_outcome;
pub mod download_phase;
pub mod error;
pub mod segmented_downloader;

// 重导出公共类型
pub use download_outcome::DownloadOutcome;
pub use download_phase::DownloadPhase;
pub use error::DownloadError;
pub use segmented_downloader::SegmentedDownloader;
