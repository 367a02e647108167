// src/domain/author/entity.rs
use crate::domain::article::{Article, ArticleRegistry};
use crate::domain::author::value_objects::{AuthorId, AuthorName, AuthorNamePolicy};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::magazine::Magazine;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct AuthorRecord {
    id: AuthorId,
    name: AuthorName,
    created_at: DateTime<Utc>,
}

/// Shared handle to an author.
///
/// Clones refer to the same author. Equality and hashing follow identity, so
/// two authors with the same name are still different authors.
#[derive(Debug, Clone)]
pub struct Author {
    inner: Arc<AuthorRecord>,
}

impl Author {
    /// Creates an author without checking the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_name(AuthorName::unchecked(name))
    }

    /// Creates an author whose name is checked against `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`] when the name fails the policy.
    pub fn with_policy(name: impl Into<String>, policy: AuthorNamePolicy) -> DomainResult<Self> {
        let name = AuthorName::new(name, policy)?;
        Ok(Self::from_name(name))
    }

    fn from_name(name: AuthorName) -> Self {
        Self {
            inner: Arc::new(AuthorRecord {
                id: AuthorId::generate(),
                name,
                created_at: Utc::now(),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> AuthorId {
        self.inner.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.name.as_str()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Always fails: the name is fixed once the author exists.
    ///
    /// # Errors
    ///
    /// Always returns [`DomainError::ImmutableField`].
    pub fn set_name(&self, new_name: impl Into<String>) -> DomainResult<()> {
        let attempted: String = new_name.into();
        tracing::warn!(author_id = %self.id(), attempted = %attempted, "rejected author rename");
        Err(DomainError::immutable("name"))
    }

    /// Articles written by this author, in registry order.
    #[must_use]
    pub fn articles(&self, registry: &dyn ArticleRegistry) -> Vec<Article> {
        registry
            .all()
            .into_iter()
            .filter(|article| article.author() == self)
            .collect()
    }

    /// Distinct magazines this author has written for, in first-seen order.
    #[must_use]
    pub fn magazines(&self, registry: &dyn ArticleRegistry) -> Vec<Magazine> {
        let magazines: IndexSet<Magazine> = self
            .articles(registry)
            .iter()
            .map(|article| article.magazine().clone())
            .collect();
        magazines.into_iter().collect()
    }

    /// Writes a new article for `magazine` and registers it.
    ///
    /// # Errors
    ///
    /// Fails like [`Article::new`] when the title is rejected.
    pub fn add_article(
        &self,
        registry: &dyn ArticleRegistry,
        magazine: &Magazine,
        title: impl fmt::Display,
    ) -> DomainResult<Article> {
        Article::new(registry, self.clone(), magazine.clone(), title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles at all.
    #[must_use]
    pub fn topic_areas(&self, registry: &dyn ArticleRegistry) -> Option<Vec<String>> {
        let articles = self.articles(registry);
        if articles.is_empty() {
            return None;
        }
        let categories: IndexSet<String> = articles
            .iter()
            .map(|article| article.magazine().category())
            .collect();
        Some(categories.into_iter().collect())
    }

    /// Removes every article by this author from the shared registry.
    pub fn clear_articles(&self, registry: &dyn ArticleRegistry) {
        let removed = registry.remove_where(&|article: &Article| article.author() == self);
        tracing::debug!(author_id = %self.id(), removed, "cleared author articles");
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
