//! Developer store queries.

use crate::error::ClientResult;
use crate::query::types::{Developer, DeveloperList};
use crate::query::{decode, Query};
use crate::transport::keys;

impl Query {
    /// Returns the developer record of a user.
    pub async fn get_developer(&self, username: &str) -> ClientResult<Developer> {
        let resp = self
            .transport()
            .query(&keys::developer_key(username), keys::DEVELOPER_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the list of all registered developers.
    pub async fn get_developer_list(&self) -> ClientResult<DeveloperList> {
        let resp = self
            .transport()
            .query(&keys::developer_list_key(), keys::DEVELOPER_STORE)
            .await?;
        decode(&resp)
    }
}
