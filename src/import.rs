//! Bulk import of lawyer profiles from a JSON file.
//!
//! The HTTP surface is read-only; this is how operators populate the table.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

use crate::config::Config;
use crate::db;
use crate::error::DirectoryError;
use crate::models::NewLawyer;
use crate::search::fold_case;

/// Reads a JSON array of profiles.
pub fn load_profiles(path: &Path) -> Result<Vec<NewLawyer>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;
    let profiles: Vec<NewLawyer> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {}", path.display()))?;
    Ok(profiles)
}

/// Inserts all profiles in one transaction. Either every row lands or none do.
pub async fn insert_lawyers(
    pool: &SqlitePool,
    profiles: &[NewLawyer],
) -> Result<usize, DirectoryError> {
    let mut tx = pool.begin().await?;

    for p in profiles {
        let expertise = p
            .expertise
            .as_ref()
            .map(|items| serde_json::to_string(items))
            .transpose()
            .map_err(DirectoryError::EncodeExpertise)?;

        sqlx::query(
            r#"
            INSERT INTO lawyer (
                id, name, specialty, location, imageurl, phone, email, website,
                experience, rate_range, bio, education, certifications, expertise,
                name_fold, specialty_fold, location_fold
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(p.id)
        .bind(&p.name)
        .bind(&p.specialty)
        .bind(&p.location)
        .bind(&p.imageurl)
        .bind(&p.phone)
        .bind(&p.email)
        .bind(&p.website)
        .bind(&p.experience)
        .bind(&p.rate_range)
        .bind(&p.bio)
        .bind(&p.education)
        .bind(&p.certifications)
        .bind(expertise)
        .bind(fold_case(&p.name))
        .bind(fold_case(&p.specialty))
        .bind(fold_case(&p.location))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(profiles.len())
}

/// CLI entry point for `fndlwr import <file>`.
pub async fn run_import(config: &Config, path: &Path) -> Result<()> {
    let profiles = load_profiles(path)?;
    let pool = db::connect(config).await?;

    let result = insert_lawyers(&pool, &profiles).await;
    pool.close().await;

    let count = result.with_context(|| format!("Import of {} failed", path.display()))?;
    tracing::info!(count, file = %path.display(), "imported lawyer profiles");
    println!("imported: {}", count);
    Ok(())
}
