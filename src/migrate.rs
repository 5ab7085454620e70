use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::search::fold_case;

/// Lower-cased copies of the searchable text columns. SQLite `LIKE` only
/// folds ASCII, so matching runs against these instead.
const FOLD_COLUMNS: [&str; 3] = ["name_fold", "specialty_fold", "location_fold"];

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    migrate_pool(&pool).await?;
    pool.close().await;
    Ok(())
}

/// Creates the `lawyer` table if it does not exist yet.
///
/// `expertise` holds a JSON array of strings; NULL reads back as an empty list.
/// Tables created before the fold columns existed gain them here, and every
/// row's folded text is recomputed so externally loaded rows stay searchable.
pub async fn migrate_pool(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lawyer (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            specialty TEXT NOT NULL,
            location TEXT NOT NULL,
            imageurl TEXT,
            phone TEXT,
            email TEXT,
            website TEXT,
            experience TEXT,
            rate_range TEXT,
            bio TEXT,
            education TEXT,
            certifications TEXT,
            expertise TEXT,
            name_fold TEXT,
            specialty_fold TEXT,
            location_fold TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    for column in FOLD_COLUMNS {
        let present: bool = sqlx::query_scalar(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('lawyer') WHERE name = ?",
        )
        .bind(column)
        .fetch_one(pool)
        .await?;
        if !present {
            sqlx::query(&format!("ALTER TABLE lawyer ADD COLUMN {} TEXT", column))
                .execute(pool)
                .await?;
        }
    }

    refresh_folded_text(pool).await
}

async fn refresh_folded_text(pool: &SqlitePool) -> Result<()> {
    let rows: Vec<(i64, String, String, String)> =
        sqlx::query_as("SELECT id, name, specialty, location FROM lawyer")
            .fetch_all(pool)
            .await?;

    let mut tx = pool.begin().await?;
    for (id, name, specialty, location) in &rows {
        sqlx::query(
            "UPDATE lawyer SET name_fold = ?, specialty_fold = ?, location_fold = ? WHERE id = ?",
        )
        .bind(fold_case(name))
        .bind(fold_case(specialty))
        .bind(fold_case(location))
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    if !rows.is_empty() {
        tracing::debug!(rows = rows.len(), "refreshed folded search columns");
    }
    Ok(())
}
