// tests/support/helpers.rs
use magazine_core::{Author, Magazine};
use once_cell::sync::OnceCell;

static TRACING: OnceCell<()> = OnceCell::new();

/// Installs a test-writer subscriber once per test binary.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("magazine_core=debug")
            .with_test_writer()
            .try_init();
    });
}

pub fn names(authors: &[Author]) -> Vec<String> {
    authors.iter().map(|a| a.name().to_string()).collect()
}

pub fn magazine_names(magazines: &[Magazine]) -> Vec<String> {
    magazines.iter().map(Magazine::name).collect()
}
