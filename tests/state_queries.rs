//! Query decode-path integration tests against an in-memory node.

mod common;

use std::sync::Arc;

use serde_json::json;

use common::FakeNode;
use plaza_sdk::transport::keys;
use plaza_sdk::{ClientConfig, ClientError, Query, Transport};

fn setup(node: Arc<FakeNode>) -> Query {
    common::init_tracing();
    let config = ClientConfig::default();
    Query::new(Transport::with_node(&config, node))
}

fn post_info_json(author: &str, post_id: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "post_id": post_id,
        "title": "hello",
        "content": "world",
        "author": author,
        "parent_author": "",
        "parent_postID": "",
        "source_author": "",
        "source_postID": "",
        "links": []
    }))
    .unwrap()
}

fn post_meta_json(created_at: i64) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "created_at": created_at,
        "last_updated_at": created_at,
        "last_activity_at": created_at,
        "allow_replies": true,
        "is_deleted": false,
        "total_donate_count": 2,
        "total_report_coin_day": {"amount": 0},
        "total_upvote_coin_day": {"amount": 7},
        "total_view_count": 40,
        "total_reward": {"amount": 350},
        "redistribution_split_rate": "0"
    }))
    .unwrap()
}

fn view_json(username: &str, times: i64) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "username": username,
        "created": 1_700_000_000,
        "times": times
    }))
    .unwrap()
}

#[tokio::test]
async fn test_point_query_decodes_post_info() {
    let node = Arc::new(FakeNode::new());
    node.put(
        keys::POST_STORE,
        b"alice#1article#postInfo",
        &post_info_json("alice", "1article"),
    );
    let query = setup(node);

    let info = query.get_post_info("alice", "1article").await.unwrap();
    assert_eq!(info.author, "alice");
    assert_eq!(info.post_id, "1article");
}

#[tokio::test]
async fn test_missing_record_is_a_remote_error() {
    let node = Arc::new(FakeNode::new());
    let query = setup(node);

    let err = query.get_post_info("alice", "missing").await.unwrap_err();
    match err {
        ClientError::RemoteError { code, log } => {
            assert_eq!(code, 3);
            assert_eq!(log, "record not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_corrupt_record_is_a_decode_error() {
    let node = Arc::new(FakeNode::new());
    node.put(keys::POST_STORE, b"alice#1article#postInfo", b"not-json");
    let query = setup(node);

    let err = query.get_post_info("alice", "1article").await.unwrap_err();
    assert!(matches!(err, ClientError::DecodeError { .. }));
}

#[tokio::test]
async fn test_get_post_merges_info_and_meta() {
    let node = Arc::new(FakeNode::new());
    node.put(
        keys::POST_STORE,
        b"alice#1article#postInfo",
        &post_info_json("alice", "1article"),
    );
    node.put(
        keys::POST_STORE,
        b"postMeta#alice#1article",
        &post_meta_json(1_700_000_000),
    );
    let query = setup(node);

    let post = query.get_post("alice", "1article").await.unwrap();
    assert_eq!(post.author, "alice");
    assert_eq!(post.title, "hello");
    assert_eq!(post.created_at, 1_700_000_000);
    assert_eq!(post.total_reward.amount, 350);
}

#[tokio::test]
async fn test_get_user_all_posts_keys_by_post_id() {
    let node = Arc::new(FakeNode::new());
    for post_id in ["1article", "2article"] {
        let permlink = keys::permlink("alice", post_id);
        node.put(
            keys::POST_STORE,
            &keys::post_info_key(&permlink),
            &post_info_json("alice", post_id),
        );
        node.put(
            keys::POST_STORE,
            &keys::post_meta_key(&permlink),
            &post_meta_json(1_700_000_000),
        );
    }
    let query = setup(node);

    let posts = query.get_user_all_posts("alice").await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts["1article"].post_id, "1article");
    assert_eq!(posts["2article"].allow_replies, true);
}

#[tokio::test]
async fn test_get_user_all_posts_fails_when_a_meta_lookup_fails() {
    let node = Arc::new(FakeNode::new());
    let permlink = keys::permlink("alice", "1article");
    node.put(
        keys::POST_STORE,
        &keys::post_info_key(&permlink),
        &post_info_json("alice", "1article"),
    );
    // No meta record: the whole aggregate must fail, not partially succeed.
    let query = setup(node);

    let err = query.get_user_all_posts("alice").await.unwrap_err();
    assert!(matches!(err, ClientError::RemoteError { .. }));
}

#[tokio::test]
async fn test_range_scan_aborts_on_first_corrupt_entry() {
    let node = Arc::new(FakeNode::new());
    let permlink = keys::permlink("alice", "1article");
    node.put(
        keys::POST_STORE,
        &keys::post_view_key(&permlink, "bob"),
        &view_json("bob", 1),
    );
    node.put(
        keys::POST_STORE,
        &keys::post_view_key(&permlink, "carol"),
        b"{\"username\": 42}",
    );
    let query = setup(node);

    let err = query
        .get_post_all_views("alice", "1article")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::DecodeError { .. }));
}

#[tokio::test]
async fn test_post_views_scan_keys_by_viewer() {
    let node = Arc::new(FakeNode::new());
    let permlink = keys::permlink("alice", "1article");
    node.put(
        keys::POST_STORE,
        &keys::post_view_key(&permlink, "bob"),
        &view_json("bob", 1),
    );
    node.put(
        keys::POST_STORE,
        &keys::post_view_key(&permlink, "carol"),
        &view_json("carol", 3),
    );
    let query = setup(node);

    let views = query.get_post_all_views("alice", "1article").await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views["bob"].times, 1);
    assert_eq!(views["carol"].times, 3);
}

#[tokio::test]
async fn test_empty_subspace_yields_empty_map() {
    let node = Arc::new(FakeNode::new());
    let query = setup(node);

    let views = query.get_post_all_views("alice", "1article").await.unwrap();
    assert!(views.is_empty());
}

#[tokio::test]
async fn test_followers_scan_keys_by_follower_name() {
    let node = Arc::new(FakeNode::new());
    node.put(
        keys::ACCOUNT_STORE,
        &keys::follower_key("alice", "bob"),
        &serde_json::to_vec(&json!({"created_at": 1, "follower_name": "bob"})).unwrap(),
    );
    let query = setup(node);

    let followers = query.get_all_followers("alice").await.unwrap();
    assert_eq!(followers["bob"].follower_name, "bob");
}

#[tokio::test]
async fn test_get_all_validators() {
    let node = Arc::new(FakeNode::new());
    node.put(
        keys::VALIDATOR_STORE,
        &keys::validator_list_key(),
        &serde_json::to_vec(&json!({
            "oncall_validators": ["alice", "bob"],
            "all_validators": ["alice", "bob", "carol"],
            "pre_block_validators": ["alice"],
            "lowest_power": {"amount": 1000},
            "lowest_validator": "bob"
        }))
        .unwrap(),
    );
    let query = setup(node);

    let validators = query.get_all_validators().await.unwrap();
    assert_eq!(validators.oncall_validators.len(), 2);
    assert_eq!(validators.lowest_validator, "bob");
}

#[tokio::test]
async fn test_get_seq_number_reads_account_meta() {
    let node = Arc::new(FakeNode::new());
    node.put(
        keys::ACCOUNT_STORE,
        &keys::account_meta_key("alice"),
        &serde_json::to_vec(&json!({
            "sequence": 42,
            "last_activity": 1_700_000_000,
            "transaction_capacity": {"amount": 10}
        }))
        .unwrap(),
    );
    let query = setup(node);

    assert_eq!(query.get_seq_number("alice").await.unwrap(), 42);
}

#[tokio::test]
async fn test_delegations_scan_keys_by_delegator() {
    let node = Arc::new(FakeNode::new());
    node.put(
        keys::VOTE_STORE,
        &keys::delegation_key("alice", "bob"),
        &serde_json::to_vec(&json!({"delegator": "bob", "amount": {"amount": 500}})).unwrap(),
    );
    let query = setup(node);

    let delegations = query.get_voter_all_delegations("alice").await.unwrap();
    assert_eq!(delegations["bob"].amount.amount, 500);
}
