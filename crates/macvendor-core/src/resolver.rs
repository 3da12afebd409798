use crate::{LookupRequest, LookupResult, Result};
use async_trait::async_trait;

/// A back end able to map a MAC address to vendor information
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve a single request
    async fn resolve(&self, request: &LookupRequest) -> Result<LookupResult>;
}

#[async_trait]
impl<R: Resolver + ?Sized> Resolver for &R {
    async fn resolve(&self, request: &LookupRequest) -> Result<LookupResult> {
        (**self).resolve(request).await
    }
}
