// src/infrastructure/registry.rs
use crate::domain::article::{Article, ArticleEvent, ArticleRegistry};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};

/// Vec-backed registry. Every query is a linear scan over a snapshot.
#[derive(Debug, Default)]
pub struct InMemoryArticleRegistry {
    articles: RwLock<Vec<Article>>,
    events: Option<Mutex<Vec<ArticleEvent>>>,
}

impl InMemoryArticleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that also records an [`ArticleEvent`] for every add and removal.
    #[must_use]
    pub fn with_event_log() -> Self {
        Self {
            articles: RwLock::default(),
            events: Some(Mutex::default()),
        }
    }

    /// Recorded events, oldest first. Empty unless the log is enabled.
    #[must_use]
    pub fn events(&self) -> Vec<ArticleEvent> {
        self.events
            .as_ref()
            .map_or_else(Vec::new, |events| events.lock().clone())
    }

    fn record(&self, event: impl FnOnce() -> ArticleEvent) {
        if let Some(events) = &self.events {
            events.lock().push(event());
        }
    }
}

impl ArticleRegistry for InMemoryArticleRegistry {
    fn add(&self, article: Article) {
        tracing::debug!(
            article_id = %article.id(),
            author_id = %article.author().id(),
            magazine_id = %article.magazine().id(),
            "registered article"
        );
        self.record(|| ArticleEvent::Registered {
            id: article.id(),
            author_id: article.author().id(),
            magazine_id: article.magazine().id(),
            at: Utc::now(),
        });
        self.articles.write().push(article);
    }

    fn all(&self) -> Vec<Article> {
        self.articles.read().clone()
    }

    fn remove_where(&self, predicate: &dyn Fn(&Article) -> bool) -> usize {
        let removed: Vec<Article> = {
            let mut articles = self.articles.write();
            let (gone, kept): (Vec<Article>, Vec<Article>) =
                std::mem::take(&mut *articles).into_iter().partition(predicate);
            *articles = kept;
            gone
        };

        let now = Utc::now();
        for article in &removed {
            tracing::debug!(article_id = %article.id(), "removed article");
            self.record(|| ArticleEvent::Removed {
                id: article.id(),
                author_id: article.author().id(),
                at: now,
            });
        }
        removed.len()
    }

    fn len(&self) -> usize {
        self.articles.read().len()
    }
}
