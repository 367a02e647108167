use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::magazine::MagazineId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArticleEvent {
    Registered {
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        at: DateTime<Utc>,
    },
    Removed {
        id: ArticleId,
        author_id: AuthorId,
        at: DateTime<Utc>,
    },
}

impl ArticleEvent {
    #[must_use]
    pub const fn article_id(&self) -> ArticleId {
        match self {
            Self::Registered { id, .. } | Self::Removed { id, .. } => *id,
        }
    }
}
