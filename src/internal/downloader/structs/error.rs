//! 下载相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("URL 格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP 状态码异常: {0}")]
    HttpStatus(StatusCode),

    #[error("服务器不支持 Range 请求")]
    RangeNotSupported,

    #[error("分段下载需要已知资源总大小")]
    UnknownTotalSize,

    #[error("Range 请求被拒绝，服务器返回 {status} 而非 206")]
    RangeRejected { status: StatusCode },

    #[error("未设置保存路径")]
    NoDestination,

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("预分配文件空间失败: {0}")]
    PreallocateFile(std::io::Error),

    #[error("文件定位失败: {0}")]
    SeekFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("刷新文件失败: {0}")]
    FlushFile(std::io::Error),

    #[error("打开分段临时文件失败: {0}")]
    OpenPartFile(std::io::Error),

    #[error("删除分段临时文件失败: {0}")]
    RemovePartFile(std::io::Error),

    #[error("分段任务失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("分段工作线程异常退出")]
    WorkerPanic,

    #[error("构建工作线程运行时失败: {0}")]
    BuildRuntime(std::io::Error),
}
