//! Post store queries.

use std::collections::HashMap;

use crate::error::{ClientError, ClientResult};
use crate::query::types::{Comment, Donations, Post, PostInfo, PostMeta, ReportOrUpvote, View};
use crate::query::{decode, Query};
use crate::transport::keys;

impl Query {
    /// Returns post info given its author and post ID.
    pub async fn get_post_info(&self, author: &str, post_id: &str) -> ClientResult<PostInfo> {
        let permlink = keys::permlink(author, post_id);
        let resp = self
            .transport()
            .query(&keys::post_info_key(&permlink), keys::POST_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns post meta given its author and post ID.
    pub async fn get_post_meta(&self, author: &str, post_id: &str) -> ClientResult<PostMeta> {
        let permlink = keys::permlink(author, post_id);
        let resp = self
            .transport()
            .query(&keys::post_meta_key(&permlink), keys::POST_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the merged view of a post's info and meta records. Fails
    /// as a whole if either underlying record is missing or corrupt.
    pub async fn get_post(&self, author: &str, post_id: &str) -> ClientResult<Post> {
        let info = self.get_post_info(author, post_id).await?;
        let meta = self.get_post_meta(author, post_id).await?;
        Ok(merge_post(info, meta))
    }

    /// Returns a specific comment of a post given the commenting post's
    /// permlink.
    pub async fn get_post_comment(
        &self,
        author: &str,
        post_id: &str,
        comment_permlink: &str,
    ) -> ClientResult<Comment> {
        let permlink = keys::permlink(author, post_id);
        let resp = self
            .transport()
            .query(
                &keys::post_comment_key(&permlink, comment_permlink),
                keys::POST_STORE,
            )
            .await?;
        decode(&resp)
    }

    /// Returns a view of a post performed by a user.
    pub async fn get_post_view(
        &self,
        author: &str,
        post_id: &str,
        viewer: &str,
    ) -> ClientResult<View> {
        let permlink = keys::permlink(author, post_id);
        let resp = self
            .transport()
            .query(&keys::post_view_key(&permlink, viewer), keys::POST_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns all donations one user has given to a post.
    pub async fn get_post_donations(
        &self,
        author: &str,
        post_id: &str,
        donor: &str,
    ) -> ClientResult<Donations> {
        let permlink = keys::permlink(author, post_id);
        let resp = self
            .transport()
            .query(&keys::post_donation_key(&permlink, donor), keys::POST_STORE)
            .await?;
        decode(&resp)
    }

    /// Returns the report or upvote a user has put on a post.
    pub async fn get_post_report_or_upvote(
        &self,
        author: &str,
        post_id: &str,
        user: &str,
    ) -> ClientResult<ReportOrUpvote> {
        let permlink = keys::permlink(author, post_id);
        let resp = self
            .transport()
            .query(
                &keys::post_report_or_upvote_key(&permlink, user),
                keys::POST_STORE,
            )
            .await?;
        decode(&resp)
    }

    //
    // range queries
    //

    /// Returns all posts a user has created, keyed by post ID. Each
    /// discovered post-info entry triggers a point lookup for its meta
    /// record; the whole aggregate fails if any lookup fails.
    pub async fn get_user_all_posts(&self, username: &str) -> ClientResult<HashMap<String, Post>> {
        let prefix = keys::user_post_prefix(username);
        let pairs = self
            .transport()
            .query_subspace(&prefix, keys::POST_STORE)
            .await?;

        let mut posts = HashMap::new();
        for pair in pairs {
            let info: PostInfo = decode(&pair.value)?;
            let meta = self.get_post_meta(&info.author, &info.post_id).await?;
            let post_id = keys::strip_prefix_and_tag(&pair.key, &prefix, keys::POST_INFO_TAG)
                .ok_or_else(|| ClientError::ProtocolError {
                    detail: "post-info entry key lies outside the queried prefix".to_string(),
                })?;
            posts.insert(post_id, merge_post(info, meta));
        }
        Ok(posts)
    }

    /// Returns all comments on a post, keyed by the commenting post's
    /// permlink.
    pub async fn get_post_all_comments(
        &self,
        author: &str,
        post_id: &str,
    ) -> ClientResult<HashMap<String, Comment>> {
        let permlink = keys::permlink(author, post_id);
        self.collect_subspace(&keys::post_comment_prefix(&permlink), keys::POST_STORE)
            .await
    }

    /// Returns all views of a post, keyed by viewer.
    pub async fn get_post_all_views(
        &self,
        author: &str,
        post_id: &str,
    ) -> ClientResult<HashMap<String, View>> {
        let permlink = keys::permlink(author, post_id);
        self.collect_subspace(&keys::post_view_prefix(&permlink), keys::POST_STORE)
            .await
    }

    /// Returns all donations a post has received, keyed by donor.
    pub async fn get_post_all_donations(
        &self,
        author: &str,
        post_id: &str,
    ) -> ClientResult<HashMap<String, Donations>> {
        let permlink = keys::permlink(author, post_id);
        self.collect_subspace(&keys::post_donation_prefix(&permlink), keys::POST_STORE)
            .await
    }

    /// Returns all reports and upvotes a post has received, keyed by user.
    pub async fn get_post_all_report_or_upvotes(
        &self,
        author: &str,
        post_id: &str,
    ) -> ClientResult<HashMap<String, ReportOrUpvote>> {
        let permlink = keys::permlink(author, post_id);
        self.collect_subspace(
            &keys::post_report_or_upvote_prefix(&permlink),
            keys::POST_STORE,
        )
        .await
    }
}

fn merge_post(info: PostInfo, meta: PostMeta) -> Post {
    Post {
        post_id: info.post_id,
        title: info.title,
        content: info.content,
        author: info.author,
        parent_author: info.parent_author,
        parent_post_id: info.parent_post_id,
        source_author: info.source_author,
        source_post_id: info.source_post_id,
        links: info.links,
        created_at: meta.created_at,
        last_updated_at: meta.last_updated_at,
        last_activity_at: meta.last_activity_at,
        allow_replies: meta.allow_replies,
        is_deleted: meta.is_deleted,
        total_donate_count: meta.total_donate_count,
        total_report_coin_day: meta.total_report_coin_day,
        total_upvote_coin_day: meta.total_upvote_coin_day,
        total_view_count: meta.total_view_count,
        total_reward: meta.total_reward,
        redistribution_split_rate: meta.redistribution_split_rate,
    }
}
