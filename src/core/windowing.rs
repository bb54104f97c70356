use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Visible part of a category axis, as percentages of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    pub start: f64,
    pub end: f64,
}

impl ZoomWindow {
    pub const FULL: Self = Self {
        start: 0.0,
        end: 100.0,
    };
}

/// Parses the temporal shapes category labels usually carry: RFC 3339
/// timestamps, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD`, `YYYY-MM` and `YYYY`.
#[must_use]
pub fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.naive_utc());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(instant);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
                NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
            } else {
                None
            }
        })?;
    date.and_hms_opt(0, 0, 0)
}

/// Orders two axis labels as instants when both parse, lexically otherwise.
#[must_use]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (parse_instant(a), parse_instant(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Maps an inclusive `[from, to]` label range onto the category axis.
///
/// Missing bounds leave that side open. Reversed bounds are swapped. When no
/// category falls inside the range, or the axis has fewer than two
/// categories, the full axis is returned.
#[must_use]
pub fn zoom_window(categories: &[String], from: Option<&str>, to: Option<&str>) -> ZoomWindow {
    if categories.len() < 2 {
        return ZoomWindow::FULL;
    }
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) if compare_labels(from, to) == Ordering::Greater => {
            (Some(to), Some(from))
        }
        bounds => bounds,
    };

    let inside = |label: &str| {
        from.is_none_or(|from| compare_labels(label, from) != Ordering::Less)
            && to.is_none_or(|to| compare_labels(label, to) != Ordering::Greater)
    };
    let first = categories.iter().position(|label| inside(label));
    let last = categories.iter().rposition(|label| inside(label));
    let (Some(first), Some(last)) = (first, last) else {
        return ZoomWindow::FULL;
    };

    let span = (categories.len() - 1) as f64;
    ZoomWindow {
        start: first as f64 / span * 100.0,
        end: last as f64 / span * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{ZoomWindow, compare_labels, parse_instant, zoom_window};
    use std::cmp::Ordering;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn year_and_date_labels_compare_as_instants() {
        assert!(parse_instant("2020").is_some());
        assert!(parse_instant("2020-03").is_some());
        assert_eq!(compare_labels("2020", "2019-12-31"), Ordering::Greater);
        assert_eq!(compare_labels("apple", "banana"), Ordering::Less);
    }

    #[test]
    fn window_covers_matching_categories() {
        let categories = labels(&["2018", "2019", "2020", "2021", "2022"]);
        let window = zoom_window(&categories, Some("2019"), Some("2021"));
        assert_eq!(window.start, 25.0);
        assert_eq!(window.end, 75.0);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let categories = labels(&["2018", "2019", "2020"]);
        let window = zoom_window(&categories, Some("2020"), Some("2019"));
        assert_eq!(window.start, 50.0);
        assert_eq!(window.end, 100.0);
    }

    #[test]
    fn open_or_unmatched_ranges_fall_back_to_full_axis() {
        let categories = labels(&["2018", "2019"]);
        assert_eq!(zoom_window(&categories, None, None), ZoomWindow::FULL);
        assert_eq!(
            zoom_window(&categories, Some("2030"), Some("2031")),
            ZoomWindow::FULL
        );
        assert_eq!(zoom_window(&labels(&["2018"]), Some("2018"), None), ZoomWindow::FULL);
    }
}
