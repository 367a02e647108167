use crate::domain::article::entity::Article;

/// Shared, insertion-ordered collection of every registered article.
///
/// Implementations must not call back into the registry from inside
/// `remove_where`'s predicate.
pub trait ArticleRegistry: Send + Sync {
    /// Appends an article. Equal-looking articles are kept as separate entries.
    fn add(&self, article: Article);

    /// Snapshot of all articles in insertion order.
    fn all(&self) -> Vec<Article>;

    /// Removes every article matching `predicate` and returns how many went.
    fn remove_where(&self, predicate: &dyn Fn(&Article) -> bool) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self) -> usize {
        self.remove_where(&|_: &Article| true)
    }
}
