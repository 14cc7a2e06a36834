//! Infra store queries.

use crate::error::ClientResult;
use crate::query::types::{InfraProvider, InfraProviderList};
use crate::query::{decode, Query};
use crate::transport::keys;

impl Query {
    /// Returns the usage record of an infra provider.
    pub async fn get_infra_provider(&self, username: &str) -> ClientResult<InfraProvider> {
        let resp = self
            .transport()
            .query(&keys::infra_provider_key(username), keys::INFRA_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the list of all infra providers.
    pub async fn get_infra_provider_list(&self) -> ClientResult<InfraProviderList> {
        let resp = self
            .transport()
            .query(&keys::infra_provider_list_key(), keys::INFRA_STORE)
            .await?;
        decode(&resp)
    }
}
