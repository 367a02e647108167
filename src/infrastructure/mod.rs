pub mod registry;

pub use registry::InMemoryArticleRegistry;
