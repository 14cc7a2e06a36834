//! Signable messages.
//!
//! `Msg` is the closed set of state-changing intents the chain accepts.
//! Each variant carries only the fields of that operation and is
//! constructed fresh per call; the enum's externally visible encoding is
//! `{"type": <tag>, "value": <fields>}` and feeds directly into the
//! canonical sign doc, so tags and field names are part of the wire
//! contract.

use serde::{Deserialize, Serialize};

use crate::query::types::{
    AccountParam, BandwidthParam, DeveloperParam, EvaluateOfContentValueParam,
    GlobalAllocationParam, IdToUrlMapping, InfraInternalAllocationParam, Permission, PostParam,
    ProposalParam, ValidatorParam, VoteParam,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterMsg {
    pub referrer: String,
    pub register_fee: String,
    pub new_user: String,
    pub new_reset_public_key: String,
    pub new_transaction_public_key: String,
    pub new_app_public_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferMsg {
    pub sender: String,
    pub receiver: String,
    pub amount: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowMsg {
    pub follower: String,
    pub followee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnfollowMsg {
    pub follower: String,
    pub followee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimInterestMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccountMsg {
    pub username: String,
    pub json_meta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverMsg {
    pub username: String,
    pub new_reset_public_key: String,
    pub new_transaction_public_key: String,
    pub new_app_public_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePostMsg {
    pub author: String,
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub parent_author: String,
    #[serde(rename = "parent_postID")]
    pub parent_post_id: String,
    pub source_author: String,
    #[serde(rename = "source_postID")]
    pub source_post_id: String,
    pub links: Vec<IdToUrlMapping>,
    pub redistribution_split_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePostMsg {
    pub author: String,
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub links: Vec<IdToUrlMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePostMsg {
    pub author: String,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonateMsg {
    pub username: String,
    pub amount: String,
    pub author: String,
    pub post_id: String,
    pub from_app: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewMsg {
    pub username: String,
    pub author: String,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOrUpvoteMsg {
    pub username: String,
    pub author: String,
    pub post_id: String,
    pub is_report: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorDepositMsg {
    pub username: String,
    pub deposit: String,
    pub validator_public_key: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorWithdrawMsg {
    pub username: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorRevokeMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeInMsg {
    pub username: String,
    pub deposit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeOutMsg {
    pub username: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateMsg {
    pub delegator: String,
    pub voter: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegatorWithdrawMsg {
    pub delegator: String,
    pub voter: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperRegisterMsg {
    pub username: String,
    pub deposit: String,
    pub website: String,
    pub description: String,
    pub app_meta_data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperUpdateMsg {
    pub username: String,
    pub website: String,
    pub description: String,
    pub app_meta_data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperRevokeMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantPermissionMsg {
    pub username: String,
    pub authorized_app: String,
    pub validity_period_sec: i64,
    pub grant_level: Permission,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreAuthorizationMsg {
    pub username: String,
    pub authorized_app: String,
    pub validity_period_sec: i64,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokePermissionMsg {
    pub username: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderReportMsg {
    pub username: String,
    pub usage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteProposalMsg {
    pub voter: String,
    pub proposal_id: String,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePostContentMsg {
    pub creator: String,
    pub permlink: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeProtocolMsg {
    pub creator: String,
    pub link: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeParamMsg<P> {
    pub creator: String,
    pub parameter: P,
    pub reason: String,
}

/// Closed set of state-changing intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    #[serde(rename = "register")]
    Register(RegisterMsg),
    #[serde(rename = "transfer")]
    Transfer(TransferMsg),
    #[serde(rename = "follow")]
    Follow(FollowMsg),
    #[serde(rename = "unfollow")]
    Unfollow(UnfollowMsg),
    #[serde(rename = "claim")]
    Claim(ClaimMsg),
    #[serde(rename = "claimInterest")]
    ClaimInterest(ClaimInterestMsg),
    #[serde(rename = "updateAccount")]
    UpdateAccount(UpdateAccountMsg),
    #[serde(rename = "recover")]
    Recover(RecoverMsg),
    #[serde(rename = "createPost")]
    CreatePost(CreatePostMsg),
    #[serde(rename = "updatePost")]
    UpdatePost(UpdatePostMsg),
    #[serde(rename = "deletePost")]
    DeletePost(DeletePostMsg),
    #[serde(rename = "donate")]
    Donate(DonateMsg),
    #[serde(rename = "view")]
    View(ViewMsg),
    #[serde(rename = "reportOrUpvote")]
    ReportOrUpvote(ReportOrUpvoteMsg),
    #[serde(rename = "validatorDeposit")]
    ValidatorDeposit(ValidatorDepositMsg),
    #[serde(rename = "validatorWithdraw")]
    ValidatorWithdraw(ValidatorWithdrawMsg),
    #[serde(rename = "validatorRevoke")]
    ValidatorRevoke(ValidatorRevokeMsg),
    #[serde(rename = "stakeIn")]
    StakeIn(StakeInMsg),
    #[serde(rename = "stakeOut")]
    StakeOut(StakeOutMsg),
    #[serde(rename = "delegate")]
    Delegate(DelegateMsg),
    #[serde(rename = "delegatorWithdraw")]
    DelegatorWithdraw(DelegatorWithdrawMsg),
    #[serde(rename = "developerRegister")]
    DeveloperRegister(DeveloperRegisterMsg),
    #[serde(rename = "developerUpdate")]
    DeveloperUpdate(DeveloperUpdateMsg),
    #[serde(rename = "developerRevoke")]
    DeveloperRevoke(DeveloperRevokeMsg),
    #[serde(rename = "grantPermission")]
    GrantPermission(GrantPermissionMsg),
    #[serde(rename = "preAuthorizationPermission")]
    PreAuthorization(PreAuthorizationMsg),
    #[serde(rename = "revokePermission")]
    RevokePermission(RevokePermissionMsg),
    #[serde(rename = "providerReport")]
    ProviderReport(ProviderReportMsg),
    #[serde(rename = "voteProposal")]
    VoteProposal(VoteProposalMsg),
    #[serde(rename = "deletePostContent")]
    DeletePostContent(DeletePostContentMsg),
    #[serde(rename = "upgradeProtocol")]
    UpgradeProtocol(UpgradeProtocolMsg),
    #[serde(rename = "changeGlobalAllocationParam")]
    ChangeGlobalAllocationParam(ChangeParamMsg<GlobalAllocationParam>),
    #[serde(rename = "changeEvaluateOfContentValueParam")]
    ChangeEvaluateOfContentValueParam(ChangeParamMsg<EvaluateOfContentValueParam>),
    #[serde(rename = "changeInfraInternalAllocationParam")]
    ChangeInfraInternalAllocationParam(ChangeParamMsg<InfraInternalAllocationParam>),
    #[serde(rename = "changeVoteParam")]
    ChangeVoteParam(ChangeParamMsg<VoteParam>),
    #[serde(rename = "changeProposalParam")]
    ChangeProposalParam(ChangeParamMsg<ProposalParam>),
    #[serde(rename = "changeDeveloperParam")]
    ChangeDeveloperParam(ChangeParamMsg<DeveloperParam>),
    #[serde(rename = "changeValidatorParam")]
    ChangeValidatorParam(ChangeParamMsg<ValidatorParam>),
    #[serde(rename = "changeBandwidthParam")]
    ChangeBandwidthParam(ChangeParamMsg<BandwidthParam>),
    #[serde(rename = "changeAccountParam")]
    ChangeAccountParam(ChangeParamMsg<AccountParam>),
    #[serde(rename = "changePostParam")]
    ChangePostParam(ChangeParamMsg<PostParam>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_serializes_with_type_tag() {
        let msg = Msg::Follow(FollowMsg {
            follower: "alice".to_string(),
            followee: "bob".to_string(),
        });
        let encoded = serde_json::to_value(&msg).unwrap();
        assert_eq!(encoded["type"], "follow");
        assert_eq!(encoded["value"]["follower"], "alice");
        assert_eq!(encoded["value"]["followee"], "bob");
    }

    #[test]
    fn test_msg_round_trips() {
        let msg = Msg::GrantPermission(GrantPermissionMsg {
            username: "alice".to_string(),
            authorized_app: "reader-app".to_string(),
            validity_period_sec: 3600,
            grant_level: Permission::App,
        });
        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: Msg = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_unknown_type_tag_is_rejected() {
        let raw = r#"{"type": "mintCoins", "value": {}}"#;
        assert!(serde_json::from_str::<Msg>(raw).is_err());
    }
}
