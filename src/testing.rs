//! Shared fixtures for unit tests.

use sqlx::SqlitePool;

use crate::db;
use crate::import::insert_lawyers;
use crate::migrate::migrate_pool;
use crate::models::NewLawyer;

fn profile(id: i64, name: &str, specialty: &str, location: &str) -> NewLawyer {
    NewLawyer {
        id: Some(id),
        name: name.to_string(),
        specialty: specialty.to_string(),
        location: location.to_string(),
        imageurl: None,
        phone: None,
        email: None,
        website: None,
        experience: None,
        rate_range: None,
        bio: None,
        education: None,
        certifications: None,
        expertise: None,
    }
}

/// Five profiles. Two share a specialty, two share a city, and one name
/// contains a literal `%`.
pub fn fixtures() -> Vec<NewLawyer> {
    let mut ada = profile(1, "Ada Smith", "Family Law", "Austin, TX");
    ada.imageurl = Some("ada.jpg".to_string());
    ada.phone = Some("555-0100".to_string());
    ada.email = Some("ada@example.com".to_string());
    ada.website = Some("https://ada.example.com".to_string());
    ada.experience = Some("12 years".to_string());
    ada.rate_range = Some("$200-$300/hr".to_string());
    ada.bio = Some("Ada handles divorce and custody matters.".to_string());
    ada.education = Some("UT Austin School of Law".to_string());
    ada.certifications = Some("Board Certified in Family Law".to_string());
    ada.expertise = Some(vec!["Divorce".to_string(), "Custody".to_string()]);

    let mut bob = profile(2, "Bob Smithers", "Criminal Defense", "Dallas, TX");
    bob.imageurl = Some("https://cdn.example.com/bob.png".to_string());

    vec![
        ada,
        bob,
        profile(3, "Carla Jones", "Family Law", "Boston, MA"),
        profile(4, "Dan 100% Wins", "Personal Injury", "Austin, TX"),
        profile(5, "Eve Adams", "Immigration", "Seattle, WA"),
    ]
}

/// A sixth profile whose searchable text is outside ASCII. Kept out of
/// [`fixtures`] so row counts elsewhere stay fixed.
pub fn accented_profile() -> NewLawyer {
    profile(6, "José Núñez", "Derecho Penal", "Málaga, España")
}

pub async fn empty_pool() -> SqlitePool {
    let pool = db::connect_url("sqlite::memory:", 1).await.unwrap();
    migrate_pool(&pool).await.unwrap();
    pool
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    insert_lawyers(&pool, &fixtures()).await.unwrap();
    pool
}
