//! Review card rendering.
//!
//! Turns one review record plus its parsed sections into a markdown card.
//! Section headers are re-inserted only for populated sections; an all-empty
//! [`ParsedReview`] produces a card with no section block at all.

use crate::markers;
use crate::review::{ParsedReview, ReviewRecord};

/// Service for rendering review cards as markdown.
#[derive(Debug, Clone)]
pub struct CardRenderer;

impl CardRenderer {
    /// Creates a new `CardRenderer` instance.
    pub fn new() -> Self {
        Self
    }

    /// Renders a review card from a record and its parsed sections.
    ///
    /// Card format produced:
    /// ```markdown
    /// **Рейтинг:** ★ 5.0 · Отзыв пациента
    /// **Пациент:** <author> · <date>
    /// **Клиника:** <clinic>
    ///
    /// ### История пациента
    /// ...
    ///
    /// ### Понравилось
    /// ...
    ///
    /// **Когда был приём:** <visit date>
    /// **Где был приём:** <visit place>
    ///
    /// [Читать отзыв](<source url>)
    /// ```
    ///
    /// Sections whose field is empty are omitted entirely. The parsed
    /// sections are taken as given; this method never re-segments the raw
    /// text.
    pub fn card_render(&self, record: &ReviewRecord, parsed: &ParsedReview) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "**Рейтинг:** ★ {}.0 · Отзыв пациента\n",
            record.rating
        ));
        output.push_str(&format!(
            "**Пациент:** {} · {}\n",
            record.author, record.date
        ));
        output.push_str(&format!("**Клиника:** {}\n", record.clinic));

        if !parsed.history.is_empty() {
            output.push_str(&format!("\n### {}\n{}\n", markers::HISTORY, parsed.history));
        }
        if !parsed.liked.is_empty() {
            output.push_str(&format!("\n### {}\n{}\n", markers::LIKED, parsed.liked));
        }
        if !parsed.disliked.is_empty() {
            output.push_str(&format!(
                "\n### {}\n{}\n",
                markers::DISLIKED,
                parsed.disliked
            ));
        }

        if !parsed.visit_date.is_empty() || !parsed.visit_place.is_empty() {
            output.push('\n');
            if !parsed.visit_date.is_empty() {
                output.push_str(&format!("**Когда был приём:** {}\n", parsed.visit_date));
            }
            if !parsed.visit_place.is_empty() {
                output.push_str(&format!("**Где был приём:** {}\n", parsed.visit_place));
            }
        }

        output.push_str(&format!("\n[Читать отзыв]({})\n", record.source_url));

        output
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}
