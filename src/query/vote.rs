//! Vote store queries.

use std::collections::HashMap;

use crate::error::ClientResult;
use crate::query::types::{Delegation, Vote, Voter};
use crate::query::{decode, Query};
use crate::transport::keys;

impl Query {
    /// Returns the voter record of a user.
    pub async fn get_voter(&self, username: &str) -> ClientResult<Voter> {
        let resp = self
            .transport()
            .query(&keys::voter_key(username), keys::VOTE_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns a user's vote on a proposal.
    pub async fn get_vote(&self, proposal_id: &str, voter: &str) -> ClientResult<Vote> {
        let resp = self
            .transport()
            .query(&keys::vote_key(proposal_id, voter), keys::VOTE_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the delegation from a delegator to a voter.
    pub async fn get_delegation(&self, voter: &str, delegator: &str) -> ClientResult<Delegation> {
        let resp = self
            .transport()
            .query(&keys::delegation_key(voter, delegator), keys::VOTE_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns all votes cast on a proposal, keyed by voter.
    pub async fn get_proposal_all_votes(
        &self,
        proposal_id: &str,
    ) -> ClientResult<HashMap<String, Vote>> {
        self.collect_subspace(&keys::proposal_vote_prefix(proposal_id), keys::VOTE_STORE)
            .await
    }

    /// Returns all delegations towards a voter, keyed by delegator.
    pub async fn get_voter_all_delegations(
        &self,
        voter: &str,
    ) -> ClientResult<HashMap<String, Delegation>> {
        self.collect_subspace(&keys::delegation_prefix(voter), keys::VOTE_STORE)
            .await
    }
}
