use crate::domain::model::ImportedUser;
use async_trait::async_trait;

/// One-shot source of the initial contact list.
///
/// Implementations never fail outward: any transport or decoding problem is
/// logged and reported as an empty list.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch(&self) -> Vec<ImportedUser>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn users_endpoint(&self) -> &str;
    fn import_timeout_secs(&self) -> u64;
    fn import_enabled(&self) -> bool;
}
