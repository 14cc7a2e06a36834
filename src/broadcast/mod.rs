//! Transaction broadcast.
//!
//! # Data Flow
//! ```text
//! wrapper operation (e.g. create_post)
//!     → msgs.rs (typed message)
//!     → transport::sign_build_broadcast (sign, encode, submit)
//!     → result.rs (classify node response)
//!     → BroadcastResponse or classified error
//! ```
//!
//! The sign/encode/submit sequence runs as an independent task so that it
//! can be raced against the caller's cancellation token and the configured
//! deadline. Whichever side loses the race is abandoned, never awaited;
//! the node's eventual answer to an abandoned round trip is discarded.

pub mod msgs;
pub mod result;

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::query::types::{
    AccountParam, BandwidthParam, DeveloperParam, EvaluateOfContentValueParam,
    GlobalAllocationParam, IdToUrlMapping, InfraInternalAllocationParam, Permission, PostParam,
    ProposalParam, ValidatorParam, VoteParam,
};
use crate::transport::{encode, keys, BroadcastMode, Transport};

use msgs::*;

pub use result::{BroadcastResponse, INVALID_SEQ_ERR_CODE};

/// Broadcast surface: one operation per message type, all funneling into
/// [`Broadcast::broadcast_transaction`].
#[derive(Debug, Clone)]
pub struct Broadcast {
    transport: Transport,
    timeout: Duration,
}

impl Broadcast {
    /// Create a broadcast handle over a transport, taking the call
    /// deadline from the configuration.
    pub fn new(config: &ClientConfig, transport: Transport) -> Self {
        Self {
            transport,
            timeout: Duration::from_secs(config.broadcast_timeout_secs),
        }
    }

    /// Override the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the sign/encode/submit pipeline for one message and classify
    /// the outcome. The network round trip is raced against `cancel` and
    /// the configured deadline; the call never blocks past either.
    pub async fn broadcast_transaction(
        &self,
        cancel: &CancellationToken,
        msg: Msg,
        priv_key_hex: &str,
        seq: u64,
        memo: &str,
        mode: BroadcastMode,
    ) -> ClientResult<BroadcastResponse> {
        let transport = self.transport.clone();
        let priv_key_hex = priv_key_hex.to_string();
        let memo = memo.to_string();
        let mut pipeline = tokio::spawn(async move {
            transport
                .sign_build_broadcast(&msg, &priv_key_hex, seq, &memo, mode)
                .await
        });

        let resp = tokio::select! {
            joined = &mut pipeline => match joined {
                Ok(result) => result?,
                Err(e) => {
                    return Err(ClientError::ProtocolError {
                        detail: format!("broadcast pipeline task failed: {e}"),
                    });
                }
            },
            _ = cancel.cancelled() => {
                tracing::warn!(sequence = seq, "broadcast cancelled, abandoning in-flight round trip");
                return Err(ClientError::Timeout {
                    cause: "cancelled by caller".to_string(),
                });
            }
            _ = tokio::time::sleep(self.timeout) => {
                tracing::warn!(
                    sequence = seq,
                    timeout_secs = self.timeout.as_secs(),
                    "broadcast deadline elapsed, abandoning in-flight round trip"
                );
                return Err(ClientError::Timeout {
                    cause: format!("no node response within {}s", self.timeout.as_secs()),
                });
            }
        };

        result::interpret(mode, resp)
    }

    //
    // account transactions
    //

    /// Registers a new user, funded by the referrer.
    pub async fn register(
        &self,
        cancel: &CancellationToken,
        referrer: &str,
        register_fee: &str,
        username: &str,
        reset_pub_key_hex: &str,
        transaction_pub_key_hex: &str,
        app_pub_key_hex: &str,
        referrer_priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        encode::parse_pub_key(reset_pub_key_hex)?;
        encode::parse_pub_key(transaction_pub_key_hex)?;
        encode::parse_pub_key(app_pub_key_hex)?;

        let msg = Msg::Register(RegisterMsg {
            referrer: referrer.to_string(),
            register_fee: register_fee.to_string(),
            new_user: username.to_string(),
            new_reset_public_key: reset_pub_key_hex.to_string(),
            new_transaction_public_key: transaction_pub_key_hex.to_string(),
            new_app_public_key: app_pub_key_hex.to_string(),
        });
        self.broadcast_transaction(cancel, msg, referrer_priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Sends tokens from the sender to the receiver.
    pub async fn transfer(
        &self,
        cancel: &CancellationToken,
        sender: &str,
        receiver: &str,
        amount: &str,
        memo: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Transfer(TransferMsg {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount: amount.to_string(),
            memo: memo.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Creates a social relationship between follower and followee.
    pub async fn follow(
        &self,
        cancel: &CancellationToken,
        follower: &str,
        followee: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Follow(FollowMsg {
            follower: follower.to_string(),
            followee: followee.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Revokes the social relationship between follower and followee.
    pub async fn unfollow(
        &self,
        cancel: &CancellationToken,
        follower: &str,
        followee: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Unfollow(UnfollowMsg {
            follower: follower.to_string(),
            followee: followee.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Claims pending content rewards of a user.
    pub async fn claim(
        &self,
        cancel: &CancellationToken,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Claim(ClaimMsg {
            username: username.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Claims accrued stake interest of a user.
    pub async fn claim_interest(
        &self,
        cancel: &CancellationToken,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ClaimInterest(ClaimInterestMsg {
            username: username.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Updates account metadata not covered by the info or bank records.
    pub async fn update_account(
        &self,
        cancel: &CancellationToken,
        username: &str,
        json_meta: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::UpdateAccount(UpdateAccountMsg {
            username: username.to_string(),
            json_meta: json_meta.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Replaces all keys of a user after loss or compromise.
    pub async fn recover(
        &self,
        cancel: &CancellationToken,
        username: &str,
        new_reset_pub_key_hex: &str,
        new_transaction_pub_key_hex: &str,
        new_app_pub_key_hex: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        encode::parse_pub_key(new_reset_pub_key_hex)?;
        encode::parse_pub_key(new_transaction_pub_key_hex)?;
        encode::parse_pub_key(new_app_pub_key_hex)?;

        let msg = Msg::Recover(RecoverMsg {
            username: username.to_string(),
            new_reset_public_key: new_reset_pub_key_hex.to_string(),
            new_transaction_public_key: new_transaction_pub_key_hex.to_string(),
            new_app_public_key: new_app_pub_key_hex.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    //
    // post transactions
    //

    /// Creates a new post, waiting for the execution result.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_post(
        &self,
        cancel: &CancellationToken,
        author: &str,
        post_id: &str,
        title: &str,
        content: &str,
        parent_author: &str,
        parent_post_id: &str,
        source_author: &str,
        source_post_id: &str,
        redistribution_split_rate: &str,
        links: Vec<IdToUrlMapping>,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Self::create_post_msg(
            author,
            post_id,
            title,
            content,
            parent_author,
            parent_post_id,
            source_author,
            source_post_id,
            redistribution_split_rate,
            links,
        );
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Creates a new post, returning as soon as the pending pool accepts it.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_post_sync(
        &self,
        cancel: &CancellationToken,
        author: &str,
        post_id: &str,
        title: &str,
        content: &str,
        parent_author: &str,
        parent_post_id: &str,
        source_author: &str,
        source_post_id: &str,
        redistribution_split_rate: &str,
        links: Vec<IdToUrlMapping>,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Self::create_post_msg(
            author,
            post_id,
            title,
            content,
            parent_author,
            parent_post_id,
            source_author,
            source_post_id,
            redistribution_split_rate,
            links,
        );
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Sync)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    fn create_post_msg(
        author: &str,
        post_id: &str,
        title: &str,
        content: &str,
        parent_author: &str,
        parent_post_id: &str,
        source_author: &str,
        source_post_id: &str,
        redistribution_split_rate: &str,
        links: Vec<IdToUrlMapping>,
    ) -> Msg {
        Msg::CreatePost(CreatePostMsg {
            author: author.to_string(),
            post_id: post_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            parent_author: parent_author.to_string(),
            parent_post_id: parent_post_id.to_string(),
            source_author: source_author.to_string(),
            source_post_id: source_post_id.to_string(),
            links,
            redistribution_split_rate: redistribution_split_rate.to_string(),
        })
    }

    /// Updates a post's content in place.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_post(
        &self,
        cancel: &CancellationToken,
        author: &str,
        post_id: &str,
        title: &str,
        content: &str,
        links: Vec<IdToUrlMapping>,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::UpdatePost(UpdatePostMsg {
            author: author.to_string(),
            post_id: post_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            links,
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Marks a post as deleted; the record stays but its content is cleared.
    pub async fn delete_post(
        &self,
        cancel: &CancellationToken,
        author: &str,
        post_id: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::DeletePost(DeletePostMsg {
            author: author.to_string(),
            post_id: post_id.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Donates tokens to a post, waiting for the execution result.
    #[allow(clippy::too_many_arguments)]
    pub async fn donate(
        &self,
        cancel: &CancellationToken,
        username: &str,
        author: &str,
        amount: &str,
        post_id: &str,
        from_app: &str,
        memo: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Donate(DonateMsg {
            username: username.to_string(),
            amount: amount.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
            from_app: from_app.to_string(),
            memo: memo.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Donates tokens to a post, returning at pending-pool acceptance.
    #[allow(clippy::too_many_arguments)]
    pub async fn donate_sync(
        &self,
        cancel: &CancellationToken,
        username: &str,
        author: &str,
        amount: &str,
        post_id: &str,
        from_app: &str,
        memo: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Donate(DonateMsg {
            username: username.to_string(),
            amount: amount.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
            from_app: from_app.to_string(),
            memo: memo.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Sync)
            .await
    }

    /// Records one view of a post by a user.
    pub async fn view(
        &self,
        cancel: &CancellationToken,
        username: &str,
        author: &str,
        post_id: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::View(ViewMsg {
            username: username.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Reports or upvotes a post.
    pub async fn report_or_upvote(
        &self,
        cancel: &CancellationToken,
        username: &str,
        author: &str,
        post_id: &str,
        is_report: bool,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ReportOrUpvote(ReportOrUpvoteMsg {
            username: username.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
            is_report,
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    //
    // validator transactions
    //

    /// Deposits tokens to join the validator set.
    #[allow(clippy::too_many_arguments)]
    pub async fn validator_deposit(
        &self,
        cancel: &CancellationToken,
        username: &str,
        deposit: &str,
        validator_pub_key_hex: &str,
        link: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        encode::parse_pub_key(validator_pub_key_hex)?;

        let msg = Msg::ValidatorDeposit(ValidatorDepositMsg {
            username: username.to_string(),
            deposit: deposit.to_string(),
            validator_public_key: validator_pub_key_hex.to_string(),
            link: link.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Withdraws part of a validator's deposit while staying a validator.
    pub async fn validator_withdraw(
        &self,
        cancel: &CancellationToken,
        username: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ValidatorWithdraw(ValidatorWithdrawMsg {
            username: username.to_string(),
            amount: amount.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Revokes a validator's entire deposit, leaving the validator set.
    pub async fn validator_revoke(
        &self,
        cancel: &CancellationToken,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ValidatorRevoke(ValidatorRevokeMsg {
            username: username.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    //
    // vote transactions
    //

    /// Deposits tokens to become a voter.
    pub async fn stake_in(
        &self,
        cancel: &CancellationToken,
        username: &str,
        deposit: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::StakeIn(StakeInMsg {
            username: username.to_string(),
            deposit: deposit.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Withdraws part of a voter's deposit.
    pub async fn stake_out(
        &self,
        cancel: &CancellationToken,
        username: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::StakeOut(StakeOutMsg {
            username: username.to_string(),
            amount: amount.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Delegates voting power from a delegator to a voter.
    pub async fn delegate(
        &self,
        cancel: &CancellationToken,
        delegator: &str,
        voter: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::Delegate(DelegateMsg {
            delegator: delegator.to_string(),
            voter: voter.to_string(),
            amount: amount.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Withdraws part of a delegation while it remains in place.
    pub async fn delegator_withdraw(
        &self,
        cancel: &CancellationToken,
        delegator: &str,
        voter: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::DelegatorWithdraw(DelegatorWithdrawMsg {
            delegator: delegator.to_string(),
            voter: voter.to_string(),
            amount: amount.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Votes on an open proposal.
    pub async fn vote_proposal(
        &self,
        cancel: &CancellationToken,
        voter: &str,
        proposal_id: &str,
        result: bool,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::VoteProposal(VoteProposalMsg {
            voter: voter.to_string(),
            proposal_id: proposal_id.to_string(),
            result,
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    //
    // developer transactions
    //

    /// Registers a developer with an initial deposit.
    #[allow(clippy::too_many_arguments)]
    pub async fn developer_register(
        &self,
        cancel: &CancellationToken,
        username: &str,
        deposit: &str,
        website: &str,
        description: &str,
        app_meta_data: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::DeveloperRegister(DeveloperRegisterMsg {
            username: username.to_string(),
            deposit: deposit.to_string(),
            website: website.to_string(),
            description: description.to_string(),
            app_meta_data: app_meta_data.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Updates a developer's public information.
    #[allow(clippy::too_many_arguments)]
    pub async fn developer_update(
        &self,
        cancel: &CancellationToken,
        username: &str,
        website: &str,
        description: &str,
        app_meta_data: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::DeveloperUpdate(DeveloperUpdateMsg {
            username: username.to_string(),
            website: website.to_string(),
            description: description.to_string(),
            app_meta_data: app_meta_data.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Revokes a developer's deposit and registration.
    pub async fn developer_revoke(
        &self,
        cancel: &CancellationToken,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::DeveloperRevoke(DeveloperRevokeMsg {
            username: username.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Grants an app-level permission to an authorized app for a period.
    pub async fn grant_permission(
        &self,
        cancel: &CancellationToken,
        username: &str,
        authorized_app: &str,
        validity_period_sec: i64,
        grant_level: Permission,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::GrantPermission(GrantPermissionMsg {
            username: username.to_string(),
            authorized_app: authorized_app.to_string(),
            validity_period_sec,
            grant_level,
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Grants a pre-authorization allowance to an authorized app.
    #[allow(clippy::too_many_arguments)]
    pub async fn pre_authorization_permission(
        &self,
        cancel: &CancellationToken,
        username: &str,
        authorized_app: &str,
        validity_period_sec: i64,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::PreAuthorization(PreAuthorizationMsg {
            username: username.to_string(),
            authorized_app: authorized_app.to_string(),
            validity_period_sec,
            amount: amount.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Revokes a previously granted app key.
    pub async fn revoke_permission(
        &self,
        cancel: &CancellationToken,
        username: &str,
        pub_key_hex: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        encode::parse_pub_key(pub_key_hex)?;

        let msg = Msg::RevokePermission(RevokePermissionMsg {
            username: username.to_string(),
            public_key: pub_key_hex.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    //
    // infra transactions
    //

    /// Reports an infra provider's usage for inflation allocation.
    pub async fn provider_report(
        &self,
        cancel: &CancellationToken,
        username: &str,
        usage: i64,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ProviderReport(ProviderReportMsg {
            username: username.to_string(),
            usage,
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    //
    // proposal transactions
    //

    /// Censors a post's content, keyed by its permlink.
    pub async fn delete_post_content(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        post_author: &str,
        post_id: &str,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::DeletePostContent(DeletePostContentMsg {
            creator: creator.to_string(),
            permlink: keys::permlink(post_author, post_id),
            reason: reason.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a protocol upgrade.
    pub async fn upgrade_protocol(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        link: &str,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::UpgradeProtocol(UpgradeProtocolMsg {
            creator: creator.to_string(),
            link: link.to_string(),
            reason: reason.to_string(),
        });
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new global allocation parameter set.
    pub async fn change_global_allocation_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: GlobalAllocationParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeGlobalAllocationParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new content value evaluation parameter set.
    pub async fn change_evaluate_of_content_value_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: EvaluateOfContentValueParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg =
            Msg::ChangeEvaluateOfContentValueParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new infra-internal allocation parameter set.
    pub async fn change_infra_internal_allocation_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: InfraInternalAllocationParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg =
            Msg::ChangeInfraInternalAllocationParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new vote parameter set.
    pub async fn change_vote_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: VoteParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeVoteParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new proposal parameter set.
    pub async fn change_proposal_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: ProposalParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeProposalParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new developer parameter set.
    pub async fn change_developer_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: DeveloperParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeDeveloperParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new validator parameter set.
    pub async fn change_validator_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: ValidatorParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeValidatorParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new bandwidth parameter set.
    pub async fn change_bandwidth_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: BandwidthParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeBandwidthParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new account parameter set.
    pub async fn change_account_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: AccountParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangeAccountParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }

    /// Proposes a new post parameter set.
    pub async fn change_post_param(
        &self,
        cancel: &CancellationToken,
        creator: &str,
        parameter: PostParam,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> ClientResult<BroadcastResponse> {
        let msg = Msg::ChangePostParam(change_param_msg(creator, parameter, reason));
        self.broadcast_transaction(cancel, msg, priv_key_hex, seq, "", BroadcastMode::Commit)
            .await
    }
}

fn change_param_msg<P>(creator: &str, parameter: P, reason: &str) -> ChangeParamMsg<P> {
    ChangeParamMsg {
        creator: creator.to_string(),
        parameter,
        reason: reason.to_string(),
    }
}
