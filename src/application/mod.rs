pub mod dto;
pub mod input;

pub use dto::{ArticleDto, AuthorDto, MagazineCount, MagazineDto, RegistryReport};
pub use input::{ArticleInput, AuthorInput, MagazineInput};
