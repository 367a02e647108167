// tests/support/builders.rs
use magazine_core::{Article, ArticleRegistry, Author, Magazine};

pub struct MagazineBuilder {
    name: String,
    category: String,
}

impl MagazineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "Byte".into(),
            category: "Tech".into(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn build(self) -> Magazine {
        Magazine::new(self.name, self.category).unwrap()
    }
}

impl Default for MagazineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ArticleBuilder {
    author: Option<Author>,
    magazine: Option<Magazine>,
    title: String,
}

impl ArticleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            author: None,
            magazine: None,
            title: "Test Article".into(),
        }
    }

    #[must_use]
    pub fn author(mut self, author: &Author) -> Self {
        self.author = Some(author.clone());
        self
    }

    #[must_use]
    pub fn magazine(mut self, magazine: &Magazine) -> Self {
        self.magazine = Some(magazine.clone());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn register(self, registry: &dyn ArticleRegistry) -> Article {
        let author = self.author.unwrap_or_else(|| Author::new("Test Author"));
        let magazine = self
            .magazine
            .unwrap_or_else(|| MagazineBuilder::new().build());
        Article::new(registry, author, magazine, self.title).unwrap()
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
