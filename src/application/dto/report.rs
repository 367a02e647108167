use super::{ArticleDto, MagazineDto};
use crate::domain::article::ArticleRegistry;
use crate::domain::magazine::Magazine;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineCount {
    pub magazine: MagazineDto,
    pub articles: usize,
}

/// Serializable snapshot of the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryReport {
    pub total_articles: usize,
    /// Per-magazine article counts, in the order each magazine first appears.
    pub magazines: Vec<MagazineCount>,
    pub top_publisher: Option<MagazineDto>,
    pub articles: Vec<ArticleDto>,
}

impl RegistryReport {
    #[must_use]
    pub fn build(registry: &dyn ArticleRegistry) -> Self {
        let articles = registry.all();

        let mut counts: IndexMap<Magazine, usize> = IndexMap::new();
        for article in &articles {
            *counts.entry(article.magazine().clone()).or_default() += 1;
        }

        Self {
            total_articles: articles.len(),
            magazines: counts
                .iter()
                .map(|(magazine, count)| MagazineCount {
                    magazine: magazine.into(),
                    articles: *count,
                })
                .collect(),
            top_publisher: Magazine::top_publisher(registry).as_ref().map(Into::into),
            articles: articles.iter().map(Into::into).collect(),
        }
    }
}
