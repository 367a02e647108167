// src/domain/magazine/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::{CONTRIBUTING_AUTHOR_MIN_ARTICLES, Magazine, MagazineProfile};
pub use value_objects::{
    MAGAZINE_NAME_MAX_LEN, MAGAZINE_NAME_MIN_LEN, MagazineCategory, MagazineId, MagazineName,
};
