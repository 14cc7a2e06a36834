//! Logical key construction for the node's key-value stores.
//!
//! Keys must be bit-exact with the layout the node's state machine uses:
//! point keys are the primary identifier plus a record tag, composite keys
//! append a `#` separator and a secondary identifier, and every scan prefix
//! ends exactly at a separator boundary. Usernames, post IDs and proposal
//! IDs must not contain the separator byte.

/// Named key-value stores on the node.
pub const POST_STORE: &str = "post";
pub const ACCOUNT_STORE: &str = "account";
pub const VALIDATOR_STORE: &str = "validator";
pub const VOTE_STORE: &str = "vote";
pub const DEVELOPER_STORE: &str = "developer";
pub const INFRA_STORE: &str = "infra";

/// Separator between key segments.
pub const KEY_SEPARATOR: &str = "#";

/// Record tag closing a post-info key; the user-posts scan strips it to
/// recover the post ID.
pub const POST_INFO_TAG: &str = "postInfo";

/// Permlink identifying a post: `author#postID`.
pub fn permlink(author: &str, post_id: &str) -> String {
    format!("{author}{KEY_SEPARATOR}{post_id}")
}

//
// post store
//
// Post-info keys close with a record tag so the bare `author#` subspace
// enumerates exactly the post-info index; every other record kind leads
// with its entity tag, keeping the author subspace free of meta and
// sub-entity entries.

pub fn post_info_key(permlink: &str) -> Vec<u8> {
    format!("{permlink}{KEY_SEPARATOR}{POST_INFO_TAG}").into_bytes()
}

pub fn post_meta_key(permlink: &str) -> Vec<u8> {
    format!("postMeta{KEY_SEPARATOR}{permlink}").into_bytes()
}

pub fn post_comment_key(permlink: &str, comment_permlink: &str) -> Vec<u8> {
    format!("comment{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}{comment_permlink}").into_bytes()
}

pub fn post_view_key(permlink: &str, user: &str) -> Vec<u8> {
    format!("view{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}{user}").into_bytes()
}

pub fn post_donation_key(permlink: &str, user: &str) -> Vec<u8> {
    format!("donation{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}{user}").into_bytes()
}

pub fn post_report_or_upvote_key(permlink: &str, user: &str) -> Vec<u8> {
    format!("reportOrUpvote{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}{user}").into_bytes()
}

/// Subspace holding one author's post-info records.
pub fn user_post_prefix(author: &str) -> Vec<u8> {
    format!("{author}{KEY_SEPARATOR}").into_bytes()
}

pub fn post_comment_prefix(permlink: &str) -> Vec<u8> {
    format!("comment{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}").into_bytes()
}

pub fn post_view_prefix(permlink: &str) -> Vec<u8> {
    format!("view{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}").into_bytes()
}

pub fn post_donation_prefix(permlink: &str) -> Vec<u8> {
    format!("donation{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}").into_bytes()
}

pub fn post_report_or_upvote_prefix(permlink: &str) -> Vec<u8> {
    format!("reportOrUpvote{KEY_SEPARATOR}{permlink}{KEY_SEPARATOR}").into_bytes()
}

//
// account store
//

pub fn account_info_key(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}info").into_bytes()
}

pub fn account_bank_key(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}bank").into_bytes()
}

pub fn account_meta_key(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}meta").into_bytes()
}

pub fn account_reward_key(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}reward").into_bytes()
}

pub fn account_grant_list_key(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}grantKeyList").into_bytes()
}

pub fn follower_key(user: &str, follower: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}follower{KEY_SEPARATOR}{follower}").into_bytes()
}

pub fn following_key(user: &str, following: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}following{KEY_SEPARATOR}{following}").into_bytes()
}

pub fn relationship_key(user: &str, other: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}relationship{KEY_SEPARATOR}{other}").into_bytes()
}

pub fn follower_prefix(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}follower{KEY_SEPARATOR}").into_bytes()
}

pub fn following_prefix(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}following{KEY_SEPARATOR}").into_bytes()
}

//
// validator / vote / developer / infra stores
//

pub fn validator_key(user: &str) -> Vec<u8> {
    user.as_bytes().to_vec()
}

pub fn validator_list_key() -> Vec<u8> {
    b"validatorList".to_vec()
}

pub fn voter_key(user: &str) -> Vec<u8> {
    format!("{user}{KEY_SEPARATOR}voter").into_bytes()
}

pub fn vote_key(proposal_id: &str, voter: &str) -> Vec<u8> {
    format!("{proposal_id}{KEY_SEPARATOR}vote{KEY_SEPARATOR}{voter}").into_bytes()
}

pub fn delegation_key(voter: &str, delegator: &str) -> Vec<u8> {
    format!("{voter}{KEY_SEPARATOR}delegation{KEY_SEPARATOR}{delegator}").into_bytes()
}

pub fn proposal_vote_prefix(proposal_id: &str) -> Vec<u8> {
    format!("{proposal_id}{KEY_SEPARATOR}vote{KEY_SEPARATOR}").into_bytes()
}

pub fn delegation_prefix(voter: &str) -> Vec<u8> {
    format!("{voter}{KEY_SEPARATOR}delegation{KEY_SEPARATOR}").into_bytes()
}

pub fn developer_key(user: &str) -> Vec<u8> {
    user.as_bytes().to_vec()
}

pub fn developer_list_key() -> Vec<u8> {
    b"developerList".to_vec()
}

pub fn infra_provider_key(user: &str) -> Vec<u8> {
    user.as_bytes().to_vec()
}

pub fn infra_provider_list_key() -> Vec<u8> {
    b"infraProviderList".to_vec()
}

//
// prefix stripping
//

/// Recover the logical identifier of a scanned entry by stripping the scan
/// prefix. Returns `None` when the key does not lie in the subspace or the
/// remainder is not valid UTF-8.
pub fn strip_prefix(key: &[u8], prefix: &[u8]) -> Option<String> {
    let rest = key.strip_prefix(prefix)?;
    String::from_utf8(rest.to_vec()).ok()
}

/// Strip the scan prefix and a trailing `#<tag>` segment, surfacing the
/// identifier between them.
pub fn strip_prefix_and_tag(key: &[u8], prefix: &[u8], tag: &str) -> Option<String> {
    let rest = strip_prefix(key, prefix)?;
    rest.strip_suffix(&format!("{KEY_SEPARATOR}{tag}"))
        .map(|id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_point_keys() {
        let permlink = permlink("alice", "1article");
        assert_eq!(permlink, "alice#1article");
        assert_eq!(post_info_key(&permlink), b"alice#1article#postInfo");
        assert_eq!(post_meta_key(&permlink), b"postMeta#alice#1article");
        assert_eq!(post_view_key(&permlink, "bob"), b"view#alice#1article#bob");
    }

    #[test]
    fn test_scan_prefixes_end_at_separator() {
        assert_eq!(user_post_prefix("alice"), b"alice#");
        assert_eq!(post_view_prefix("alice#1article"), b"view#alice#1article#");
        assert_eq!(follower_prefix("alice"), b"alice#follower#");
        assert_eq!(proposal_vote_prefix("12"), b"12#vote#");
    }

    #[test]
    fn test_user_post_subspace_excludes_other_record_kinds() {
        // Meta and sub-entity keys must never land in the author subspace.
        let prefix = user_post_prefix("alice");
        let permlink = permlink("alice", "1article");
        assert!(post_info_key(&permlink).starts_with(&prefix));
        assert!(!post_meta_key(&permlink).starts_with(&prefix));
        assert!(!post_view_key(&permlink, "bob").starts_with(&prefix));
        assert!(!post_comment_key(&permlink, "bob#1reply").starts_with(&prefix));
    }

    #[test]
    fn test_strip_prefix_recovers_trailing_identifier() {
        let prefix = post_view_prefix("alice#1article");
        let key = post_view_key("alice#1article", "alice");
        assert_eq!(strip_prefix(&key, &prefix).as_deref(), Some("alice"));
    }

    #[test]
    fn test_strip_prefix_rejects_foreign_key() {
        let prefix = post_view_prefix("alice#1article");
        assert_eq!(strip_prefix(b"bob#2article#view#carol", &prefix), None);
    }

    #[test]
    fn test_strip_prefix_and_tag_recovers_post_id() {
        let prefix = user_post_prefix("alice");
        let key = post_info_key("alice#1article");
        assert_eq!(
            strip_prefix_and_tag(&key, &prefix, POST_INFO_TAG).as_deref(),
            Some("1article")
        );
    }

    #[test]
    fn test_account_keys() {
        assert_eq!(account_info_key("alice"), b"alice#info");
        assert_eq!(account_grant_list_key("alice"), b"alice#grantKeyList");
        assert_eq!(relationship_key("alice", "bob"), b"alice#relationship#bob");
    }

    #[test]
    fn test_singleton_list_keys() {
        assert_eq!(validator_list_key(), b"validatorList");
        assert_eq!(developer_list_key(), b"developerList");
        assert_eq!(infra_provider_list_key(), b"infraProviderList");
    }
}
