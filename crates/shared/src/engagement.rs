use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Like/comment counters tracked per underlying post.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub liked_by_current_user: bool,
}

pub trait EngagementLookup {
    fn engagement(&self, post_id: &str) -> Option<Engagement>;
}

impl EngagementLookup for HashMap<String, Engagement> {
    fn engagement(&self, post_id: &str) -> Option<Engagement> {
        self.get(post_id).cloned()
    }
}

/// Lookup that never knows about any post.
pub struct NoEngagement;

impl EngagementLookup for NoEngagement {
    fn engagement(&self, _post_id: &str) -> Option<Engagement> {
        None
    }
}
