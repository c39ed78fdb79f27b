//! Review record types.

use serde::{Deserialize, Serialize};

/// One patient review as published on the upstream review platform.
///
/// The collection of these records is fixed and curated; `full_text` is the
/// unedited testimonial body that the segmenter consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Stable identifier within the collection
    pub id: u32,
    /// Patient name as shown on the platform
    pub author: String,
    /// Publication date, verbatim from the platform
    pub date: String,
    /// Clinic where the visit took place
    pub clinic: String,
    /// Full, unedited testimonial body
    #[serde(rename = "fullText")]
    pub full_text: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    /// Outbound link to the original review
    #[serde(rename = "sourceUrl")]
    pub source_url: String,
}

/// The named sections extracted from one review text.
///
/// Each field is either a trimmed, verbatim substring of the source text or
/// empty. An empty field means the corresponding section is absent (or its
/// marker was immediately followed by another marker); callers render only
/// the populated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReview {
    /// Free-form narrative preceding the liked/disliked markers
    pub history: String,
    /// Text following the "liked" marker
    pub liked: String,
    /// Text following the "disliked" marker
    pub disliked: String,
    /// The line carrying the visit marker, kept verbatim
    #[serde(rename = "visitDate")]
    pub visit_date: String,
    /// Lines after the visit date, joined with single spaces
    #[serde(rename = "visitPlace")]
    pub visit_place: String,
}

impl ParsedReview {
    /// True when no section was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
            && self.liked.is_empty()
            && self.disliked.is_empty()
            && self.visit_date.is_empty()
            && self.visit_place.is_empty()
    }
}
