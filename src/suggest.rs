//! Autocomplete suggestions.
//!
//! Up to `max_rows` distinct (name, specialty) pairs matching the partial
//! text are flattened into `name, specialty, name, specialty, ...` and
//! de-duplicated by first occurrence. The minimum input length is the
//! caller's job; [`should_suggest`] is the shared check.

use anyhow::Result;
use sqlx::SqlitePool;
use std::collections::HashSet;

use crate::config::Config;
use crate::db;
use crate::error::DirectoryError;
use crate::search::{fold_case, like_pattern};

#[derive(Debug, Clone, Default)]
pub struct SuggestionParams {
    pub query: Option<String>,
}

impl SuggestionParams {
    /// First `query` value wins when the key repeats.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "query").then_some(value));
        Self { query }
    }
}

/// Whether `text` is long enough to be worth a suggestion lookup.
pub fn should_suggest(text: &str, min_chars: usize) -> bool {
    text.trim().chars().count() >= min_chars
}

/// Flattens rows into name/specialty candidates and drops repeats, keeping
/// the first occurrence of each string.
pub fn dedup_candidates(rows: Vec<(String, String)>) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .flat_map(|(name, specialty)| [name, specialty])
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}

/// Server-side lookup. Applies no minimum length of its own.
pub async fn fetch_suggestions(
    pool: &SqlitePool,
    text: &str,
    max_rows: i64,
) -> Result<Vec<String>, DirectoryError> {
    let pattern = like_pattern(&fold_case(text));

    let rows: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT DISTINCT name, specialty
        FROM lawyer
        WHERE name_fold LIKE ? ESCAPE '\' OR specialty_fold LIKE ? ESCAPE '\'
        LIMIT ?
        "#,
    )
    .bind(&pattern)
    .bind(&pattern)
    .bind(max_rows)
    .fetch_all(pool)
    .await?;

    Ok(dedup_candidates(rows))
}

/// CLI entry point for `fndlwr suggest`. Short input prints nothing.
pub async fn run_suggest(config: &Config, text: &str) -> Result<()> {
    if !should_suggest(text, config.suggestions.min_chars) {
        return Ok(());
    }

    let pool = db::connect(config).await?;
    let result = fetch_suggestions(&pool, text, config.suggestions.max_rows).await;
    pool.close().await;

    for suggestion in result? {
        println!("{}", suggestion);
    }
    Ok(())
}
