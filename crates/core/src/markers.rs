//! Section markers recognised in raw review text.
//!
//! Reviews are copied verbatim from the upstream review platform, which lays
//! them out with fixed Russian section headers. These literals are the
//! de-facto wire format the segmenter parses and must stay in exact sync with
//! the upstream formatting convention. Matching is case-sensitive and literal.

/// Opens the free-form narrative; anything before it (name, rating preamble)
/// is discarded.
pub const HISTORY: &str = "История пациента";

/// Opens the "liked" section.
pub const LIKED: &str = "Понравилось";

/// Opens the "disliked" section.
pub const DISLIKED: &str = "Не понравилось";

/// Opens the trailing visit-metadata block ("the visit occurred ...").
pub const VISIT: &str = "Приём был";
