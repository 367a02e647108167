use crate::domain::article::{Article, ArticleId};
use crate::domain::author::{Author, AuthorId};
use crate::domain::magazine::{Magazine, MagazineId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: AuthorId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id(),
            name: author.name().to_string(),
            created_at: author.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineDto {
    pub id: MagazineId,
    pub name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Magazine> for MagazineDto {
    fn from(magazine: &Magazine) -> Self {
        let profile = magazine.profile();
        Self {
            id: magazine.id(),
            name: profile.name.into(),
            category: profile.category.into(),
            created_at: magazine.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: ArticleId,
    pub title: String,
    pub author: AuthorDto,
    pub magazine: MagazineDto,
    pub created_at: DateTime<Utc>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id(),
            title: article.title().to_string(),
            author: article.author().into(),
            magazine: article.magazine().into(),
            created_at: article.created_at(),
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self::from(&article)
    }
}
