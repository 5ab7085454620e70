//! Lawyer lookup by ID.
//!
//! Used by both the `fndlwr get` CLI command and `GET /api/lawyer/{id}`.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::error::DirectoryError;
use crate::models::{Lawyer, LawyerRow};

/// Parses a path or CLI identifier. Anything that is not an integer cannot
/// name a row.
pub fn parse_lawyer_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Exact primary-key lookup.
pub async fn get_lawyer(pool: &SqlitePool, id: i64) -> Result<Lawyer, DirectoryError> {
    let row = sqlx::query_as::<_, LawyerRow>(
        r#"
        SELECT id, name, specialty, location, imageurl, phone, email, website,
               experience, rate_range, bio, education, certifications, expertise
        FROM lawyer
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => row.into_lawyer(),
        None => Err(DirectoryError::NotFound(id.to_string())),
    }
}

/// Lookup from an unparsed identifier; non-integers are reported as not found.
pub async fn get_lawyer_by_raw_id(pool: &SqlitePool, raw: &str) -> Result<Lawyer, DirectoryError> {
    match parse_lawyer_id(raw) {
        Some(id) => get_lawyer(pool, id).await,
        None => Err(DirectoryError::NotFound(raw.to_string())),
    }
}

/// CLI entry point for `fndlwr get`. Prints the profile to stdout.
pub async fn run_get(config: &Config, id: &str) -> Result<()> {
    let pool = db::connect(config).await?;
    let result = get_lawyer_by_raw_id(&pool, id).await;
    pool.close().await;
    let lawyer = result?;

    println!("--- Lawyer ---");
    println!("id:             {}", lawyer.id);
    println!("name:           {}", lawyer.name);
    println!("specialty:      {}", lawyer.specialty);
    println!("location:       {}", lawyer.location);
    print_optional("image:", lawyer.imageurl.as_deref());
    print_optional("experience:", lawyer.experience.as_deref());
    print_optional("rate_range:", lawyer.rate_range.as_deref());
    print_optional("phone:", lawyer.phone.as_deref());
    print_optional("email:", lawyer.email.as_deref());
    print_optional("website:", lawyer.website.as_deref());
    println!();

    if let Some(ref bio) = lawyer.bio {
        println!("--- Bio ---");
        println!("{}", bio);
        println!();
    }
    if let Some(ref education) = lawyer.education {
        println!("--- Education ---");
        println!("{}", education);
        println!();
    }
    if let Some(ref certifications) = lawyer.certifications {
        println!("--- Certifications ---");
        println!("{}", certifications);
        println!();
    }

    println!("--- Expertise ({}) ---", lawyer.expertise.len());
    for item in &lawyer.expertise {
        println!("- {}", item);
    }

    Ok(())
}

fn print_optional(label: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("{:<15} {}", label, v);
    }
}
