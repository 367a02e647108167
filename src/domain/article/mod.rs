pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use events::ArticleEvent;
pub use repository::ArticleRegistry;
pub use value_objects::{ARTICLE_TITLE_MAX_LEN, ARTICLE_TITLE_MIN_LEN, ArticleId, ArticleTitle};
