use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post as it is baked into the source, before it is stamped with a
/// creation time.
#[derive(Debug, Clone, Copy)]
pub struct PostSeed {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
}

impl PostSeed {
    pub fn stamp(&self, created_at: DateTime<Utc>) -> Post {
        Post {
            id: self.id,
            title: self.title.to_owned(),
            content: self.content.to_owned(),
            created_at,
        }
    }
}

pub fn stamp_all(seeds: &[PostSeed], created_at: DateTime<Utc>) -> Vec<Post> {
    seeds.iter().map(|seed| seed.stamp(created_at)).collect()
}
