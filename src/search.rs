//! Fuzzy lawyer search.
//!
//! A fuzzy match is a case-insensitive substring match. `query` is matched
//! against name OR specialty, `location` against location; both default to
//! the empty string, which matches every row. Rows come back in whatever
//! order the database yields them, with no limit.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::error::DirectoryError;
use crate::models::LawyerSummary;

/// Search inputs as they arrive from a query string or the CLI.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub location: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            location: Some(location.into()),
        }
    }

    /// Picks `query` and `location` out of decoded query-string pairs.
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "location" => &mut params.location,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// True when the caller supplied either field, even as an empty string.
    pub fn is_submitted(&self) -> bool {
        self.query.is_some() || self.location.is_some()
    }
}

/// Lower-cases text for matching against the `*_fold` columns.
///
/// Uses Unicode lowercasing, so `JOSÉ` and `josé` fold to the same string.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Builds a `LIKE` pattern that matches `input` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped with `\`.
pub(crate) fn like_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn search_lawyers(
    pool: &SqlitePool,
    params: &SearchParams,
) -> Result<Vec<LawyerSummary>, DirectoryError> {
    let query = like_pattern(&fold_case(params.query.as_deref().unwrap_or("")));
    let location = like_pattern(&fold_case(params.location.as_deref().unwrap_or("")));

    let rows = sqlx::query_as::<_, LawyerSummary>(
        r#"
        SELECT id, name, specialty, location, imageurl
        FROM lawyer
        WHERE (name_fold LIKE ? ESCAPE '\' OR specialty_fold LIKE ? ESCAPE '\')
          AND location_fold LIKE ? ESCAPE '\'
        "#,
    )
    .bind(&query)
    .bind(&query)
    .bind(&location)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// CLI entry point for `fndlwr search`.
pub async fn run_search(config: &Config, query: &str, location: &str) -> Result<()> {
    let pool = db::connect(config).await?;
    let result = search_lawyers(&pool, &SearchParams::new(query, location)).await;
    pool.close().await;
    let results = result?;

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, lawyer) in results.iter().enumerate() {
        println!("{}. {} / {}", i + 1, lawyer.name, lawyer.specialty);
        println!("    location: {}", lawyer.location);
        if let Some(ref image) = lawyer.imageurl {
            println!("    image: {}", image);
        }
        println!("    id: {}", lawyer.id);
        println!();
    }

    Ok(())
}
