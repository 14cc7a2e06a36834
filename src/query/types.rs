//! Domain records decoded from the node's key-value stores.
//!
//! Every record is an immutable snapshot of remote state at query time,
//! owned solely by the caller once returned. Field names follow the node's
//! JSON schema exactly; a mismatch surfaces as a decode error rather than a
//! silently wrong record.

use serde::{Deserialize, Serialize};

/// Token amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Coin {
    pub amount: i64,
}

//
// post records
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdToUrlMapping {
    pub identifier: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub parent_author: String,
    #[serde(rename = "parent_postID")]
    pub parent_post_id: String,
    pub source_author: String,
    #[serde(rename = "source_postID")]
    pub source_post_id: String,
    #[serde(default)]
    pub links: Vec<IdToUrlMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub created_at: i64,
    pub last_updated_at: i64,
    pub last_activity_at: i64,
    pub allow_replies: bool,
    pub is_deleted: bool,
    pub total_donate_count: i64,
    pub total_report_coin_day: Coin,
    pub total_upvote_coin_day: Coin,
    pub total_view_count: i64,
    pub total_reward: Coin,
    pub redistribution_split_rate: String,
}

/// Merged view of a post's info and meta records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub parent_author: String,
    #[serde(rename = "parent_postID")]
    pub parent_post_id: String,
    pub source_author: String,
    #[serde(rename = "source_postID")]
    pub source_post_id: String,
    #[serde(default)]
    pub links: Vec<IdToUrlMapping>,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub last_activity_at: i64,
    pub allow_replies: bool,
    pub is_deleted: bool,
    pub total_donate_count: i64,
    pub total_report_coin_day: Coin,
    pub total_upvote_coin_day: Coin,
    pub total_view_count: i64,
    pub total_reward: Coin,
    pub redistribution_split_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    #[serde(rename = "post_key")]
    pub post_id: String,
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub username: String,
    pub created: i64,
    pub times: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub amount: Coin,
    pub created: i64,
}

/// All donations one user has given to one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donations {
    pub username: String,
    pub donation_list: Vec<Donation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOrUpvote {
    pub username: String,
    pub stake: Coin,
    pub created: i64,
    pub is_report: bool,
}

//
// validator records
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub username: String,
    pub deposit: Coin,
    pub absent_commit: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorList {
    pub oncall_validators: Vec<String>,
    pub all_validators: Vec<String>,
    pub pre_block_validators: Vec<String>,
    pub lowest_power: Coin,
    pub lowest_validator: String,
}

//
// vote records
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    pub username: String,
    pub deposit: Coin,
    pub delegated_power: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: String,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator: String,
    pub amount: Coin,
}

//
// account records
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub username: String,
    pub created: i64,
    /// Hex-encoded ed25519 keys registered for the account.
    pub reset_key: String,
    pub transaction_key: String,
    pub app_key: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBank {
    pub address: String,
    pub balance: Coin,
    pub username: String,
    pub stake: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub sequence: u64,
    pub last_activity: i64,
    pub transaction_capacity: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantPubKey {
    pub username: String,
    pub public_key: String,
    pub expire: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantKeyList {
    pub grant_public_key_list: Vec<GrantPubKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub original_income: Coin,
    pub friction_income: Coin,
    pub actual_reward: Coin,
    pub unclaim_reward: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub donation_times: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerMeta {
    pub created_at: i64,
    pub follower_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowingMeta {
    pub created_at: i64,
    pub following_name: String,
}

//
// developer / infra records
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub username: String,
    pub deposit: Coin,
    pub app_consumption: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperList {
    pub all_developers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraProvider {
    pub username: String,
    pub usage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraProviderList {
    pub all_infra_providers: Vec<String>,
}

//
// permissions
//

/// Grant level attached to an authorized app key. Encoded as its integer
/// code on the wire; unknown codes decode as [`Permission::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Permission {
    Unknown,
    App,
    Transaction,
    Reset,
    GrantApp,
    PreAuthorization,
}

impl From<i64> for Permission {
    fn from(code: i64) -> Self {
        match code {
            1 => Permission::App,
            2 => Permission::Transaction,
            3 => Permission::Reset,
            4 => Permission::GrantApp,
            5 => Permission::PreAuthorization,
            _ => Permission::Unknown,
        }
    }
}

impl From<Permission> for i64 {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Unknown => 0,
            Permission::App => 1,
            Permission::Transaction => 2,
            Permission::Reset => 3,
            Permission::GrantApp => 4,
            Permission::PreAuthorization => 5,
        }
    }
}

//
// chain parameters
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalAllocationParam {
    pub infra_allocation: String,
    pub content_creator_allocation: String,
    pub developer_allocation: String,
    pub validator_allocation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateOfContentValueParam {
    pub consumption_time_adjust_base: i64,
    pub consumption_time_adjust_offset: i64,
    pub num_of_consumption_on_author_offset: i64,
    pub total_amount_of_consumption_base: i64,
    pub total_amount_of_consumption_offset: i64,
    pub amount_of_consumption_exponent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraInternalAllocationParam {
    pub storage_allocation: String,
    pub cdn_allocation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteParam {
    pub voter_min_deposit: Coin,
    pub voter_min_withdraw: Coin,
    pub delegator_min_withdraw: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalParam {
    pub content_censorship_decide_sec: i64,
    pub content_censorship_min_deposit: Coin,
    pub content_censorship_pass_ratio: String,
    pub change_param_decide_sec: i64,
    pub change_param_min_deposit: Coin,
    pub change_param_pass_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperParam {
    pub developer_min_deposit: Coin,
    pub developer_coin_return_interval_sec: i64,
    pub developer_coin_return_times: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorParam {
    pub validator_min_withdraw: Coin,
    pub validator_min_voting_deposit: Coin,
    pub validator_min_committing_deposit: Coin,
    pub penalty_miss_vote: Coin,
    pub penalty_miss_commit: Coin,
    pub penalty_byzantine: Coin,
    pub validator_list_size: i64,
    pub absent_commit_limitation: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandwidthParam {
    pub seconds_to_recover_bandwidth: i64,
    pub capacity_usage_per_transaction: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountParam {
    pub minimum_balance: Coin,
    pub register_fee: Coin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostParam {
    pub report_or_upvote_interval_sec: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_info_decodes_node_schema() {
        let raw = r#"{
            "post_id": "1article",
            "title": "hello",
            "content": "world",
            "author": "alice",
            "parent_author": "",
            "parent_postID": "",
            "source_author": "",
            "source_postID": "",
            "links": [{"identifier": "ref", "url": "https://example.org"}]
        }"#;
        let info: PostInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.author, "alice");
        assert_eq!(info.post_id, "1article");
        assert_eq!(info.links[0].identifier, "ref");
    }

    #[test]
    fn test_permission_round_trips_as_integer() {
        let encoded = serde_json::to_string(&Permission::Transaction).unwrap();
        assert_eq!(encoded, "2");
        let decoded: Permission = serde_json::from_str("5").unwrap();
        assert_eq!(decoded, Permission::PreAuthorization);
        let unknown: Permission = serde_json::from_str("42").unwrap();
        assert_eq!(unknown, Permission::Unknown);
    }
}
