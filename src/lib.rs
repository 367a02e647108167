//! Authors, magazines and the articles that join them.
//!
//! Articles live in an [`ArticleRegistry`] passed to every operation that
//! reads or writes them. Authors and magazines are standalone handles; their
//! relationships are computed on demand by scanning the registry.
//!
//! ```
//! use magazine_core::{Author, InMemoryArticleRegistry, Magazine};
//!
//! let registry = InMemoryArticleRegistry::new();
//! let ada = Author::new("Ada");
//! let byte = Magazine::new("Byte", "Tech")?;
//! ada.add_article(&registry, &byte, "Hello World!!")?;
//!
//! assert_eq!(byte.article_titles(&registry), vec!["Hello World!!"]);
//! # Ok::<(), magazine_core::DomainError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use config::{ConfigError, ModelConfig};
pub use domain::article::{Article, ArticleEvent, ArticleId, ArticleRegistry, ArticleTitle};
pub use domain::author::{Author, AuthorId, AuthorNamePolicy};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::magazine::{Magazine, MagazineId, MagazineProfile};
pub use infrastructure::registry::InMemoryArticleRegistry;
pub use telemetry::init_tracing;
