//! Response shapes for the REST API.
//!
//! These mirror the core types but stay separate so the HTTP contract can
//! evolve without touching `praxis-core`.

use praxis_core::{ParsedReview, ReviewRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// The named sections extracted from one review text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionsRes {
    pub history: String,
    pub liked: String,
    pub disliked: String,
    #[serde(rename = "visitDate")]
    pub visit_date: String,
    #[serde(rename = "visitPlace")]
    pub visit_place: String,
}

impl From<ParsedReview> for SectionsRes {
    fn from(parsed: ParsedReview) -> Self {
        Self {
            history: parsed.history,
            liked: parsed.liked,
            disliked: parsed.disliked,
            visit_date: parsed.visit_date,
            visit_place: parsed.visit_place,
        }
    }
}

/// One review record together with its parsed sections.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewRes {
    pub id: u32,
    pub author: String,
    pub date: String,
    pub clinic: String,
    pub rating: u8,
    #[serde(rename = "sourceUrl")]
    pub source_url: String,
    pub sections: SectionsRes,
}

impl ReviewRes {
    /// Builds the response shape from a record, segmenting its text.
    pub fn from_record(record: &ReviewRecord) -> Self {
        Self {
            id: record.id,
            author: record.author.clone(),
            date: record.date.clone(),
            clinic: record.clinic.clone(),
            rating: record.rating,
            source_url: record.source_url.clone(),
            sections: praxis_core::segment(&record.full_text).into(),
        }
    }
}

/// All reviews in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListReviewsRes {
    pub reviews: Vec<ReviewRes>,
}

/// A review rendered as a markdown card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardRes {
    pub id: u32,
    pub card: String,
}
