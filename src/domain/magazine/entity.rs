// src/domain/magazine/entity.rs
use crate::domain::article::{Article, ArticleRegistry};
use crate::domain::author::Author;
use crate::domain::errors::DomainResult;
use crate::domain::magazine::value_objects::{MagazineCategory, MagazineId, MagazineName};
use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Authors need at least this many articles in one magazine to count as
/// contributing authors of it.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 2;

/// Point-in-time copy of a magazine's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagazineProfile {
    pub name: MagazineName,
    pub category: MagazineCategory,
}

#[derive(Debug)]
struct MagazineRecord {
    id: MagazineId,
    profile: RwLock<MagazineProfile>,
    created_at: DateTime<Utc>,
}

/// Shared handle to a magazine.
///
/// Renaming through one handle is visible through every clone and every
/// article that references the magazine.
#[derive(Debug, Clone)]
pub struct Magazine {
    inner: Arc<MagazineRecord>,
}

impl Magazine {
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`](crate::DomainError::ValueConstraint)
    /// for a name outside 2 to 16 characters or an empty category.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> DomainResult<Self> {
        let name = MagazineName::new(name)?;
        let category = MagazineCategory::new(category)?;
        Ok(Self::from_profile(MagazineProfile { name, category }))
    }

    #[must_use]
    pub fn from_profile(profile: MagazineProfile) -> Self {
        Self {
            inner: Arc::new(MagazineRecord {
                id: MagazineId::generate(),
                profile: RwLock::new(profile),
                created_at: Utc::now(),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> MagazineId {
        self.inner.id
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.inner.profile.read().name.as_str().to_owned()
    }

    #[must_use]
    pub fn category(&self) -> String {
        self.inner.profile.read().category.as_str().to_owned()
    }

    #[must_use]
    pub fn profile(&self) -> MagazineProfile {
        self.inner.profile.read().clone()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Validates and stores a new name. The old name is kept on failure.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`](crate::DomainError::ValueConstraint)
    /// unless the name is 2 to 16 characters long.
    pub fn set_name(&self, name: impl Into<String>) -> DomainResult<()> {
        let name = MagazineName::new(name)?;
        self.inner.profile.write().name = name;
        Ok(())
    }

    /// Validates and stores a new category. The old category is kept on failure.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`](crate::DomainError::ValueConstraint)
    /// for an empty category.
    pub fn set_category(&self, category: impl Into<String>) -> DomainResult<()> {
        let category = MagazineCategory::new(category)?;
        self.inner.profile.write().category = category;
        Ok(())
    }

    /// Articles published in this magazine, in registry order.
    #[must_use]
    pub fn articles(&self, registry: &dyn ArticleRegistry) -> Vec<Article> {
        registry
            .all()
            .into_iter()
            .filter(|article| article.magazine() == self)
            .collect()
    }

    /// Distinct authors of this magazine's articles, in first-seen order.
    #[must_use]
    pub fn contributors(&self, registry: &dyn ArticleRegistry) -> Vec<Author> {
        let authors: IndexSet<Author> = self
            .articles(registry)
            .iter()
            .map(|article| article.author().clone())
            .collect();
        authors.into_iter().collect()
    }

    #[must_use]
    pub fn article_titles(&self, registry: &dyn ArticleRegistry) -> Vec<String> {
        self.articles(registry)
            .iter()
            .map(|article| article.title().to_string())
            .collect()
    }

    /// Authors with at least two articles in this magazine, in the order
    /// their first article appears.
    #[must_use]
    pub fn contributing_authors(&self, registry: &dyn ArticleRegistry) -> Vec<Author> {
        let mut counts: IndexMap<Author, usize> = IndexMap::new();
        for article in self.articles(registry) {
            *counts.entry(article.author().clone()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count >= CONTRIBUTING_AUTHOR_MIN_ARTICLES)
            .map(|(author, _)| author)
            .collect()
    }

    /// Magazine with the most articles across the whole registry.
    ///
    /// Ties go to the magazine whose first article appears earliest. Returns
    /// `None` for an empty registry.
    #[must_use]
    pub fn top_publisher(registry: &dyn ArticleRegistry) -> Option<Self> {
        let mut counts: IndexMap<Self, usize> = IndexMap::new();
        for article in registry.all() {
            *counts.entry(article.magazine().clone()).or_default() += 1;
        }

        let mut top: Option<(Self, usize)> = None;
        for (magazine, count) in counts {
            if top.as_ref().is_none_or(|(_, best)| count > *best) {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.inner.profile.read();
        write!(f, "{} ({})", profile.name, profile.category)
    }
}
