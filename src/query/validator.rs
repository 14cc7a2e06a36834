//! Validator store queries.

use crate::error::ClientResult;
use crate::query::types::{Validator, ValidatorList};
use crate::query::{decode, Query};
use crate::transport::keys;

impl Query {
    /// Returns validator info for a username.
    pub async fn get_validator(&self, username: &str) -> ClientResult<Validator> {
        let resp = self
            .transport()
            .query(&keys::validator_key(username), keys::VALIDATOR_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the current validator sets.
    pub async fn get_all_validators(&self) -> ClientResult<ValidatorList> {
        let resp = self
            .transport()
            .query(&keys::validator_list_key(), keys::VALIDATOR_STORE)
            .await?;
        decode(&resp)
    }
}
