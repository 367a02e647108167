mod articles;
mod report;

pub use articles::{ArticleDto, AuthorDto, MagazineDto};
pub use report::{MagazineCount, RegistryReport};
