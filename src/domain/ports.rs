use crate::utils::error::Result;

/// Where a raw request body comes from (file, stdin, event payload).
pub trait RequestSource: Send + Sync {
    fn read_request(&self) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Fixed RNG seed for reproducible draws; `None` means seed from entropy.
    fn seed(&self) -> Option<u64>;
    fn pretty_output(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}
