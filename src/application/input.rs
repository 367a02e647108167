// src/application/input.rs
//! Untyped entry points.
//!
//! Payloads arrive as `serde_json::Value`, so field types are only known at
//! runtime. Wrong JSON types surface as `DomainError::TypeConstraint`, bad
//! lengths as `DomainError::ValueConstraint`.

use crate::domain::article::{Article, ArticleRegistry, ArticleTitle};
use crate::domain::author::{Author, AuthorNamePolicy};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::magazine::{Magazine, MagazineCategory, MagazineName, MagazineProfile};
use serde_json::{Map, Value};
use uuid::Uuid;

fn as_object(value: &Value) -> DomainResult<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DomainError::type_constraint("payload", "an object"))
}

fn require_str<'a>(value: &'a Value, field: &'static str) -> DomainResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| DomainError::type_constraint(field, "a string"))
}

static MISSING: Value = Value::Null;

fn get_field<'a>(object: &'a Map<String, Value>, name: &str) -> &'a Value {
    object.get(name).unwrap_or(&MISSING)
}

/// Scalar JSON values in their display form. Containers and null have none.
///
/// Booleans render capitalised, so `false` becomes the valid title `False`
/// and `true` the too-short `True`.
fn scalar_to_string(value: &Value, field: &'static str) -> DomainResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("True".to_owned()),
        Value::Bool(false) => Ok("False".to_owned()),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(DomainError::type_constraint(field, "a string-convertible scalar"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    pub name: String,
}

impl AuthorInput {
    /// # Errors
    ///
    /// Returns [`DomainError::TypeConstraint`] unless `value` is an object
    /// whose `name` is a string.
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        let object = as_object(value)?;
        let name = require_str(get_field(object, "name"), "name")?;
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// # Errors
    ///
    /// Fails like [`Author::with_policy`].
    pub fn into_author(self, policy: AuthorNamePolicy) -> DomainResult<Author> {
        Author::with_policy(self.name, policy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagazineInput {
    profile: MagazineProfile,
}

impl MagazineInput {
    /// Checks types first, then lengths, field by field: `name` before `category`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TypeConstraint`] for a non-object payload or a
    /// non-string field, and [`DomainError::ValueConstraint`] for a bad length.
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        let object = as_object(value)?;
        let name = MagazineName::new(require_str(get_field(object, "name"), "name")?)?;
        let category =
            MagazineCategory::new(require_str(get_field(object, "category"), "category")?)?;
        Ok(Self {
            profile: MagazineProfile { name, category },
        })
    }

    #[must_use]
    pub fn into_magazine(self) -> Magazine {
        Magazine::from_profile(self.profile)
    }
}

/// Renames `magazine` from an untyped value.
///
/// # Errors
///
/// Returns [`DomainError::TypeConstraint`] for a non-string value, otherwise
/// fails like [`Magazine::set_name`].
pub fn set_magazine_name(magazine: &Magazine, value: &Value) -> DomainResult<()> {
    magazine.set_name(require_str(value, "name")?)
}

/// Changes the category of `magazine` from an untyped value.
///
/// # Errors
///
/// Returns [`DomainError::TypeConstraint`] for a non-string value, otherwise
/// fails like [`Magazine::set_category`].
pub fn set_magazine_category(magazine: &Magazine, value: &Value) -> DomainResult<()> {
    magazine.set_category(require_str(value, "category")?)
}

/// Article payload whose `author` and `magazine` fields are id strings.
#[derive(Debug, Clone)]
pub struct ArticleInput {
    pub author: Author,
    pub magazine: Magazine,
    pub title: ArticleTitle,
}

impl ArticleInput {
    /// Resolves references against the known authors and magazines.
    ///
    /// A reference that is not a string, not a UUID, or not among the known
    /// entities is not an Author (or Magazine) and fails the type check.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TypeConstraint`] for an unresolved reference or
    /// a non-scalar title, and [`DomainError::ValueConstraint`] for a title of
    /// the wrong length.
    pub fn from_value(
        value: &Value,
        authors: &[Author],
        magazines: &[Magazine],
    ) -> DomainResult<Self> {
        let object = as_object(value)?;

        let author_id = parse_reference(get_field(object, "author"), "author", "an Author")?;
        let author = authors
            .iter()
            .find(|author| author.id().0 == author_id)
            .cloned()
            .ok_or_else(|| DomainError::type_constraint("author", "an Author"))?;

        let magazine_id = parse_reference(get_field(object, "magazine"), "magazine", "a Magazine")?;
        let magazine = magazines
            .iter()
            .find(|magazine| magazine.id().0 == magazine_id)
            .cloned()
            .ok_or_else(|| DomainError::type_constraint("magazine", "a Magazine"))?;

        let title = ArticleTitle::new(scalar_to_string(get_field(object, "title"), "title")?)?;

        Ok(Self {
            author,
            magazine,
            title,
        })
    }

    /// # Errors
    ///
    /// Fails like [`Article::new`].
    pub fn register(self, registry: &dyn ArticleRegistry) -> DomainResult<Article> {
        Article::new(registry, self.author, self.magazine, self.title)
    }
}

fn parse_reference(
    value: &Value,
    field: &'static str,
    expected: &'static str,
) -> DomainResult<Uuid> {
    let raw = value
        .as_str()
        .ok_or_else(|| DomainError::type_constraint(field, expected))?;
    Uuid::parse_str(raw).map_err(|_| DomainError::type_constraint(field, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::registry::InMemoryArticleRegistry;
    use serde_json::json;

    #[test]
    fn magazine_name_must_be_a_string() {
        let err = MagazineInput::from_value(&json!({"name": 42, "category": "Tech"})).unwrap_err();
        assert_eq!(err, DomainError::type_constraint("name", "a string"));
    }

    #[test]
    fn magazine_lengths_are_checked_after_types() {
        let err = MagazineInput::from_value(&json!({"name": "B", "category": "Tech"})).unwrap_err();
        assert!(matches!(err, DomainError::ValueConstraint { field: "name", .. }));

        let err = MagazineInput::from_value(&json!({"name": "Byte", "category": ""})).unwrap_err();
        assert!(matches!(err, DomainError::ValueConstraint { field: "category", .. }));

        let magazine = MagazineInput::from_value(&json!({"name": "Byte", "category": "Tech"}))
            .unwrap()
            .into_magazine();
        assert_eq!(magazine.name(), "Byte");
    }

    #[test]
    fn setters_reject_non_strings() {
        let byte = Magazine::new("Byte", "Tech").unwrap();
        let err = set_magazine_category(&byte, &json!(["Tech"])).unwrap_err();
        assert_eq!(err, DomainError::type_constraint("category", "a string"));
        assert_eq!(byte.category(), "Tech");

        set_magazine_name(&byte, &json!("Byte Weekly")).unwrap();
        assert_eq!(byte.name(), "Byte Weekly");
    }

    #[test]
    fn author_input_requires_string_name() {
        assert!(AuthorInput::from_value(&json!({"name": null})).is_err());
        let author = AuthorInput::from_value(&json!({"name": ""}))
            .unwrap()
            .into_author(AuthorNamePolicy::Permissive)
            .unwrap();
        assert_eq!(author.name(), "");
    }

    #[test]
    fn article_references_must_resolve() {
        let registry = InMemoryArticleRegistry::new();
        let ada = Author::new("Ada");
        let byte = Magazine::new("Byte", "Tech").unwrap();
        let authors = [ada.clone()];
        let magazines = [byte.clone()];

        let err = ArticleInput::from_value(
            &json!({"author": "Ada", "magazine": byte.id().to_string(), "title": "Hello World!!"}),
            &authors,
            &magazines,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::type_constraint("author", "an Author"));

        let err = ArticleInput::from_value(
            &json!({"author": ada.id().to_string(), "magazine": 7, "title": "Hello World!!"}),
            &authors,
            &magazines,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::type_constraint("magazine", "a Magazine"));
        assert!(registry.is_empty());

        let article = ArticleInput::from_value(
            &json!({"author": ada.id().to_string(), "magazine": byte.id().to_string(), "title": 1_234_567}),
            &authors,
            &magazines,
        )
        .unwrap()
        .register(&registry)
        .unwrap();
        assert_eq!(article.title(), "1234567");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn boolean_titles_use_capitalised_spelling() {
        let registry = InMemoryArticleRegistry::new();
        let ada = Author::new("Ada");
        let byte = Magazine::new("Byte", "Tech").unwrap();
        let authors = [ada.clone()];
        let magazines = [byte.clone()];
        let payload = |title: Value| {
            json!({"author": ada.id().to_string(), "magazine": byte.id().to_string(), "title": title})
        };

        let input = ArticleInput::from_value(&payload(json!(false)), &authors, &magazines).unwrap();
        assert_eq!(input.title.as_str(), "False");

        let err = ArticleInput::from_value(&payload(json!(true)), &authors, &magazines).unwrap_err();
        assert!(matches!(err, DomainError::ValueConstraint { field: "title", .. }));
    }
}
