//! Lawyer profile types.
//!
//! One entity, two projections: [`LawyerSummary`] for search results and
//! [`Lawyer`] for the full profile. [`NewLawyer`] is the import shape.

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Search-result row: just enough to render a result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct LawyerSummary {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub imageurl: Option<String>,
}

/// Full lawyer profile returned by detail lookup.
///
/// `expertise` is always a list; an absent column becomes `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lawyer {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub imageurl: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub experience: Option<String>,
    pub rate_range: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
    pub expertise: Vec<String>,
}

/// Raw `lawyer` row as stored; `expertise` is still JSON text.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LawyerRow {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub imageurl: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub experience: Option<String>,
    pub rate_range: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
    pub expertise: Option<String>,
}

impl LawyerRow {
    pub(crate) fn into_lawyer(self) -> Result<Lawyer, DirectoryError> {
        let expertise = decode_expertise(self.id, self.expertise.as_deref())?;
        Ok(Lawyer {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            location: self.location,
            imageurl: self.imageurl,
            phone: self.phone,
            email: self.email,
            website: self.website,
            experience: self.experience,
            rate_range: self.rate_range,
            bio: self.bio,
            education: self.education,
            certifications: self.certifications,
            expertise,
        })
    }
}

/// Decodes the stored expertise column. NULL, blank and JSON `null` all
/// mean "no expertise listed".
pub(crate) fn decode_expertise(id: i64, raw: Option<&str>) -> Result<Vec<String>, DirectoryError> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) if text.trim().is_empty() => Ok(Vec::new()),
        Some(text) => serde_json::from_str::<Option<Vec<String>>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|source| DirectoryError::CorruptExpertise { id, source }),
    }
}

/// A profile as read from an import file.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLawyer {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub specialty: String,
    pub location: String,
    #[serde(default)]
    pub imageurl: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub rate_range: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub expertise: Option<Vec<String>>,
}
