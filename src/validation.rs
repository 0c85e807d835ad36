use crate::error::AppError;
use crate::models::ranking::RankingEntry;
use crate::rank::SortDirection;

pub const MAX_FILTER_LEN: usize = 50;
pub const RANKING_SIZE: usize = 4;
pub const MAX_PAGE_LIMIT: i64 = 30000;
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Trims a free-text filter value; empty means absent. Values over
/// MAX_FILTER_LEN are rejected outright to bound predicate cost.
pub fn validate_filter_text(field: &str, value: &str) -> Result<Option<String>, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > MAX_FILTER_LEN {
        return Err(AppError::BadRequest(format!(
            "Filter '{}' exceeds {} characters",
            field, MAX_FILTER_LEN
        )));
    }
    Ok(Some(trimmed.to_string()))
}

pub fn parse_sort(sort: Option<&str>) -> Result<SortDirection, AppError> {
    match sort.map(|s| s.trim().to_lowercase()) {
        None => Ok(SortDirection::Desc),
        Some(s) if s.is_empty() || s == "desc" => Ok(SortDirection::Desc),
        Some(s) if s == "asc" => Ok(SortDirection::Asc),
        Some(s) => Err(AppError::BadRequest(format!(
            "Invalid sort direction: {}",
            s
        ))),
    }
}

pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(0, MAX_PAGE_LIMIT)
}

pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// A ranking batch must be exactly RANKING_SIZE well-formed entries.
/// Any violation rejects the whole batch before anything is applied.
pub fn validate_ranking(entries: &[RankingEntry]) -> Result<(), AppError> {
    if entries.len() != RANKING_SIZE {
        return Err(AppError::BadRequest(format!(
            "Ranking must contain exactly {} entries",
            RANKING_SIZE
        )));
    }
    for entry in entries {
        if entry.id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Ranking entry is missing a card id".into(),
            ));
        }
        if !entry.score.is_finite() {
            return Err(AppError::BadRequest(
                "Ranking score must be a finite number".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: f64) -> RankingEntry {
        RankingEntry {
            id: id.into(),
            score,
        }
    }

    #[test]
    fn filter_text_trims_and_drops_empty() {
        assert_eq!(validate_filter_text("name", "  ").unwrap(), None);
        assert_eq!(
            validate_filter_text("name", " goblin ").unwrap(),
            Some("goblin".into())
        );
    }

    #[test]
    fn filter_text_length_boundary() {
        let ok = "x".repeat(MAX_FILTER_LEN);
        assert!(validate_filter_text("name", &ok).is_ok());
        let too_long = "x".repeat(MAX_FILTER_LEN + 1);
        assert!(validate_filter_text("name", &too_long).is_err());
    }

    #[test]
    fn sort_parsing() {
        assert_eq!(parse_sort(None).unwrap(), SortDirection::Desc);
        assert_eq!(parse_sort(Some("ASC")).unwrap(), SortDirection::Asc);
        assert_eq!(parse_sort(Some(" desc ")).unwrap(), SortDirection::Desc);
        assert!(parse_sort(Some("sideways")).is_err());
    }

    #[test]
    fn limit_clamping() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 0);
        assert_eq!(clamp_limit(Some(-5)), 0);
        assert_eq!(clamp_limit(Some(MAX_PAGE_LIMIT + 1)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_offset(Some(-1)), 0);
    }

    #[test]
    fn ranking_arity_enforced() {
        let three = vec![entry("a", 1.0), entry("b", 2.0), entry("c", 3.0)];
        assert!(validate_ranking(&three).is_err());
    }

    #[test]
    fn ranking_rejects_blank_id_and_non_finite_score() {
        let blank = vec![
            entry("a", 1.0),
            entry(" ", 2.0),
            entry("c", 3.0),
            entry("d", 4.0),
        ];
        assert!(validate_ranking(&blank).is_err());

        let nan = vec![
            entry("a", 1.0),
            entry("b", f64::NAN),
            entry("c", 3.0),
            entry("d", 4.0),
        ];
        assert!(validate_ranking(&nan).is_err());
    }
}
