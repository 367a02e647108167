// src/domain/article/entity.rs
use crate::domain::article::repository::ArticleRegistry;
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::author::Author;
use crate::domain::errors::DomainResult;
use crate::domain::magazine::Magazine;
use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct ArticleRecord {
    id: ArticleId,
    author: Author,
    magazine: Magazine,
    title: ArticleTitle,
    created_at: DateTime<Utc>,
}

/// An article joins one author to one magazine.
///
/// All fields are fixed at construction. Clones share identity.
#[derive(Debug, Clone)]
pub struct Article {
    inner: Arc<ArticleRecord>,
}

impl Article {
    /// Validates the title and appends the new article to `registry`.
    ///
    /// The title is taken from the value's `Display` form. Nothing is
    /// registered when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`](crate::DomainError::ValueConstraint)
    /// when the rendered title is not 5 to 50 characters long.
    pub fn new(
        registry: &dyn ArticleRegistry,
        author: Author,
        magazine: Magazine,
        title: impl fmt::Display,
    ) -> DomainResult<Self> {
        let title = ArticleTitle::coerce(title).inspect_err(|err| {
            tracing::warn!(
                author_id = %author.id(),
                magazine_id = %magazine.id(),
                error = %err,
                "rejected article"
            );
        })?;

        let article = Self {
            inner: Arc::new(ArticleRecord {
                id: ArticleId::generate(),
                author,
                magazine,
                title,
                created_at: Utc::now(),
            }),
        };
        registry.add(article.clone());
        Ok(article)
    }

    #[must_use]
    pub fn id(&self) -> ArticleId {
        self.inner.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.inner.title.as_str()
    }

    #[must_use]
    pub fn author(&self) -> &Author {
        &self.inner.author
    }

    #[must_use]
    pub fn magazine(&self) -> &Magazine {
        &self.inner.magazine
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title(), self.author())
    }
}
