//! Review text segmentation.
//!
//! Splits an unstructured, human-written testimonial into named sections for
//! structured display without rewriting any of the original wording. The
//! upstream review platform lays reviews out with fixed section headers
//! (see [`crate::markers`]); segmentation is a single pass of literal,
//! case-sensitive substring searches over the text.
//!
//! The function is total: any input, including the empty string, yields a
//! fully-formed [`ParsedReview`]. As fewer markers are found it degrades to
//! progressively coarser structuring, down to "everything is history".

use crate::markers;
use crate::review::ParsedReview;

/// Segments a raw review text into named sections.
///
/// Processing order:
/// 1. Normalise line endings to `\n` and trim the whole text.
/// 2. Split off the visit block at the first `"Приём был"`. Its first
///    non-blank line becomes `visit_date` (marker kept verbatim); any further
///    lines, joined with single spaces, become `visit_place`.
/// 3. Discard everything up to and including `"История пациента"` if present;
///    this removes the name/rating preamble.
/// 4. `history` is the remainder truncated at the earlier of the liked and
///    disliked markers; `liked` runs from after its marker to the disliked
///    marker or the end; `disliked` runs from after its marker to the end.
///    All segments are trimmed.
///
/// A marker occurring inside ordinary prose is indistinguishable from a real
/// section header and will trigger a split; the collection is curated, so
/// this is accepted. Marker order is not enforced: when `"Не понравилось"`
/// precedes `"Понравилось"` the segments are defined by the same
/// first-occurrence offsets, which leaves `liked` empty.
///
/// # Arguments
///
/// * `raw` - The full, unedited testimonial body. May be empty.
///
/// # Returns
///
/// A [`ParsedReview`] whose non-empty fields are trimmed, verbatim
/// substrings of `raw`. Never fails.
pub fn segment(raw: &str) -> ParsedReview {
    let normalised = raw.replace("\r\n", "\n");
    let text = normalised.trim();
    if text.is_empty() {
        return ParsedReview::default();
    }

    let mut main = text;
    let mut visit_date = String::new();
    let mut visit_place = String::new();

    if let Some(visit_idx) = text.find(markers::VISIT) {
        main = text[..visit_idx].trim();
        let visit_block = text[visit_idx..].trim();

        let mut lines = visit_block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());
        if let Some(first) = lines.next() {
            // Kept as-is, marker text included.
            visit_date = first.to_string();
        }
        let remaining: Vec<&str> = lines.collect();
        if !remaining.is_empty() {
            visit_place = remaining.join(" ");
        }
    }

    let rest = match main.find(markers::HISTORY) {
        Some(idx) => main[idx + markers::HISTORY.len()..].trim(),
        None => main,
    };

    let liked_idx = rest.find(markers::LIKED);
    let disliked_idx = rest.find(markers::DISLIKED);

    let history_end = match (liked_idx, disliked_idx) {
        (Some(l), Some(d)) => l.min(d),
        (Some(l), None) => l,
        (None, Some(d)) => d,
        (None, None) => rest.len(),
    };
    let history = rest[..history_end].trim().to_string();

    let liked = match liked_idx {
        Some(idx) => {
            let start = idx + markers::LIKED.len();
            let end = disliked_idx.unwrap_or(rest.len());
            if end <= start {
                // Disliked marker sits before the liked one; the liked
                // segment is positionally empty.
                String::new()
            } else {
                rest[start..end].trim().to_string()
            }
        }
        None => String::new(),
    };

    let disliked = match disliked_idx {
        Some(idx) => rest[idx + markers::DISLIKED.len()..].trim().to_string(),
        None => String::new(),
    };

    ParsedReview {
        history,
        liked,
        disliked,
        visit_date,
        visit_place,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_all_empty_fields() {
        let parsed = segment("");
        assert!(parsed.is_empty());

        let parsed = segment("   \n\t  ");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_no_markers_everything_is_history() {
        let parsed = segment("  Очень внимательный врач, спасибо!  ");
        assert_eq!(parsed.history, "Очень внимательный врач, спасибо!");
        assert_eq!(parsed.liked, "");
        assert_eq!(parsed.disliked, "");
        assert_eq!(parsed.visit_date, "");
        assert_eq!(parsed.visit_place, "");
    }

    #[test]
    fn test_all_markers_present() {
        let raw = "История пациента Текст1 Понравилось Текст2 Не понравилось Текст3 Приём был 10.01.2024\nКлиника Х";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "Текст1");
        assert_eq!(parsed.liked, "Текст2");
        assert_eq!(parsed.disliked, "Текст3");
        assert_eq!(parsed.visit_date, "Приём был 10.01.2024");
        assert_eq!(parsed.visit_place, "Клиника Х");
    }

    #[test]
    fn test_preamble_before_history_marker_is_discarded() {
        let raw = "Иванов И. ★ 5 История пациента Долго болело ухо, обратился на приём.";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "Долго болело ухо, обратился на приём.");
    }

    #[test]
    fn test_only_disliked_marker() {
        let raw = "Всё прошло быстро. Не понравилось Долгое ожидание в очереди.";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "Всё прошло быстро.");
        assert_eq!(parsed.liked, "");
        assert_eq!(parsed.disliked, "Долгое ожидание в очереди.");
    }

    #[test]
    fn test_only_liked_marker_runs_to_end() {
        let raw = "Лечили гайморит. Понравилось Внимание и подробные объяснения.";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "Лечили гайморит.");
        assert_eq!(parsed.liked, "Внимание и подробные объяснения.");
        assert_eq!(parsed.disliked, "");
    }

    #[test]
    fn test_marker_with_empty_segment() {
        let raw = "Понравилось Не понравилось Грубый администратор";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "");
        assert_eq!(parsed.liked, "");
        assert_eq!(parsed.disliked, "Грубый администратор");
    }

    #[test]
    fn test_visit_block_single_line_has_no_place() {
        let raw = "Хороший приём. Приём был 12.03.2024";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "Хороший приём.");
        assert_eq!(parsed.visit_date, "Приём был 12.03.2024");
        assert_eq!(parsed.visit_place, "");
    }

    #[test]
    fn test_visit_block_joins_place_lines_with_spaces() {
        let raw = "Текст отзыва.\nПриём был 05.06.2024\nГоспиталь для ветеранов войн\nг. Кемерово";
        let parsed = segment(raw);
        assert_eq!(parsed.visit_date, "Приём был 05.06.2024");
        assert_eq!(parsed.visit_place, "Госпиталь для ветеранов войн г. Кемерово");
    }

    #[test]
    fn test_crlf_line_endings_are_normalised() {
        let raw = "Текст отзыва.\r\nПриём был 05.06.2024\r\nКлиника Х";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "Текст отзыва.");
        assert_eq!(parsed.visit_date, "Приём был 05.06.2024");
        assert_eq!(parsed.visit_place, "Клиника Х");
    }

    #[test]
    fn test_reversed_marker_order_is_positional() {
        // The disliked marker comes first; the liked segment is bounded by an
        // offset that precedes its own start and collapses to empty, while
        // the disliked segment keeps the rest verbatim.
        let raw = "Не понравилось Очередь Понравилось Врач";
        let parsed = segment(raw);
        assert_eq!(parsed.history, "");
        assert_eq!(parsed.liked, "");
        assert_eq!(parsed.disliked, "Очередь Понравилось Врач");
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let raw = "История пациента Текст Понравилось Отношение Приём был 01.02.2024\nКлиника";
        assert_eq!(segment(raw), segment(raw));
    }

    #[test]
    fn test_fields_are_verbatim_substrings() {
        let raw = "История пациента Обратился с отитом. Понравилось Быстро и понятно. Не понравилось Парковка. Приём был 10.01.2024\nКлиника Х";
        let parsed = segment(raw);
        for field in [
            &parsed.history,
            &parsed.liked,
            &parsed.disliked,
            &parsed.visit_date,
            &parsed.visit_place,
        ] {
            assert!(raw.contains(field.as_str()), "not a substring: {field}");
        }
    }
}
