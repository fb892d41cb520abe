pub mod baseline;
pub mod metadata;
pub mod partition;
