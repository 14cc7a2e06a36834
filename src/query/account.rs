//! Account store queries.

use std::collections::HashMap;

use crate::error::ClientResult;
use crate::query::types::{
    AccountBank, AccountInfo, AccountMeta, FollowerMeta, FollowingMeta, GrantKeyList,
    Relationship, Reward,
};
use crate::query::{decode, Query};
use crate::transport::keys;

impl Query {
    /// Returns the identity record of an account.
    pub async fn get_account_info(&self, username: &str) -> ClientResult<AccountInfo> {
        let resp = self
            .transport()
            .query(&keys::account_info_key(username), keys::ACCOUNT_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the balance record of an account.
    pub async fn get_account_bank(&self, username: &str) -> ClientResult<AccountBank> {
        let resp = self
            .transport()
            .query(&keys::account_bank_key(username), keys::ACCOUNT_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the activity record of an account.
    pub async fn get_account_meta(&self, username: &str) -> ClientResult<AccountMeta> {
        let resp = self
            .transport()
            .query(&keys::account_meta_key(username), keys::ACCOUNT_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the next sequence number expected from an account's signer.
    pub async fn get_seq_number(&self, username: &str) -> ClientResult<u64> {
        let meta = self.get_account_meta(username).await?;
        Ok(meta.sequence)
    }

    /// Returns the pending reward record of an account.
    pub async fn get_reward(&self, username: &str) -> ClientResult<Reward> {
        let resp = self
            .transport()
            .query(&keys::account_reward_key(username), keys::ACCOUNT_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the donation relationship from `user` towards `other`.
    pub async fn get_relationship(&self, user: &str, other: &str) -> ClientResult<Relationship> {
        let resp = self
            .transport()
            .query(&keys::relationship_key(user, other), keys::ACCOUNT_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns all app keys a user has granted.
    pub async fn get_grant_list(&self, username: &str) -> ClientResult<GrantKeyList> {
        let resp = self
            .transport()
            .query(&keys::account_grant_list_key(username), keys::ACCOUNT_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns all followers of a user, keyed by follower name.
    pub async fn get_all_followers(
        &self,
        username: &str,
    ) -> ClientResult<HashMap<String, FollowerMeta>> {
        self.collect_subspace(&keys::follower_prefix(username), keys::ACCOUNT_STORE)
            .await
    }

    /// Returns everyone a user follows, keyed by followee name.
    pub async fn get_all_followings(
        &self,
        username: &str,
    ) -> ClientResult<HashMap<String, FollowingMeta>> {
        self.collect_subspace(&keys::following_prefix(username), keys::ACCOUNT_STORE)
            .await
    }
}
