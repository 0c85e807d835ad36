use crate::db::Db;
use crate::error::AppError;
use crate::models::leaderboard::{LeaderboardPage, LeaderboardQuery, RankedCard};
use crate::rank::{self, SortDirection};
use crate::validation;

/// Recognized filter options, validated and normalized from the raw query.
pub struct FilterCriteria {
    pub name: Option<String>,
    pub color: Option<String>,
    pub card_type: Option<String>,
    pub direction: SortDirection,
    pub limit: i64,
    pub offset: i64,
}

impl FilterCriteria {
    pub fn from_query(query: &LeaderboardQuery) -> Result<Self, AppError> {
        let name = match &query.name {
            Some(v) => validation::validate_filter_text("name", v)?,
            None => None,
        };
        let color = match &query.color {
            Some(v) => validation::validate_filter_text("color", v)?,
            None => None,
        };
        let card_type = match &query.card_type {
            Some(v) => validation::validate_filter_text("type", v)?,
            None => None,
        };
        Ok(FilterCriteria {
            name,
            color,
            card_type,
            direction: validation::parse_sort(query.sort.as_deref())?,
            limit: validation::clamp_limit(query.limit),
            offset: validation::clamp_offset(query.offset),
        })
    }

    /// WHERE fragment plus bound values. Eligibility (active, image present,
    /// non-zero score) is always enforced; user criteria only narrow it.
    fn where_clause(&self) -> (String, Vec<Box<dyn rusqlite::types::ToSql>>) {
        let mut clauses: Vec<String> = vec![
            "active = 1".into(),
            "image IS NOT NULL".into(),
            "image != ''".into(),
            "points != 0".into(),
        ];
        let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(name) = &self.name {
            clauses.push("LOWER(name) LIKE ?".into());
            values.push(Box::new(format!("%{}%", name.to_lowercase())));
        }

        if let Some(color) = &self.color {
            let color = color.to_lowercase();
            if color == "multicolor" || color == "multicolored" {
                clauses.push("color LIKE '%,%'".into());
            } else if color == "colorless" {
                clauses.push(
                    "(color IS NULL OR color = '' OR LOWER(color) = 'colorless')".into(),
                );
            } else {
                clauses.push("LOWER(color) = ?".into());
                values.push(Box::new(color));
            }
        }

        if let Some(card_type) = &self.card_type {
            clauses.push("LOWER(type) LIKE ?".into());
            values.push(Box::new(format!("%{}%", card_type.to_lowercase())));
        }

        (format!("WHERE {}", clauses.join(" AND ")), values)
    }
}

struct CardRow {
    id: String,
    name: String,
    image: String,
    image_back: Option<String>,
    points: i64,
}

pub fn query_leaderboard(
    db: &Db,
    query: &LeaderboardQuery,
) -> Result<LeaderboardPage, AppError> {
    let criteria = FilterCriteria::from_query(query)?;
    let (where_sql, values) = criteria.where_clause();

    // Ranks depend on the whole filtered set, so fetch it all and slice in
    // process. The secondary id key keeps tied rows in a stable order.
    let sql = format!(
        "SELECT id, name, image, image_back, points FROM cards {} ORDER BY points {}, id ASC",
        where_sql,
        criteria.direction.sql()
    );

    let rows: Vec<CardRow> = db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(|p| p.as_ref()).collect();
        let mapped = stmt.query_map(params_refs.as_slice(), |row| {
            Ok(CardRow {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                image: row.get(2)?,
                image_back: row.get(3)?,
                points: row.get(4)?,
            })
        })?;

        let mut rows = Vec::new();
        for row in mapped {
            rows.push(row?);
        }
        Ok(rows)
    })?;

    let total = rows.len() as i64;
    let points: Vec<i64> = rows.iter().map(|r| r.points).collect();
    let ranks = rank::competition_ranks(&points, criteria.direction);

    let ranked: Vec<RankedCard> = rows
        .into_iter()
        .zip(ranks)
        .map(|(row, rank)| RankedCard {
            card_id: row.id,
            card_name: row.name,
            card_image: row.image,
            card_image_back: row.image_back,
            points: row.points,
            rank,
        })
        .collect();

    let cards = paginate(ranked, criteria.offset, criteria.limit);
    Ok(LeaderboardPage { total, cards })
}

/// Extracts the window [offset, offset + limit). Out-of-range offsets yield
/// an empty slice, never an error.
pub fn paginate<T>(entries: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    entries
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_the_window() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(paginate(items.clone(), 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), 20, 10), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let items: Vec<i32> = (0..25).collect();
        assert!(paginate(items, 40, 20).is_empty());
    }

    #[test]
    fn paginate_zero_limit_is_empty() {
        let items: Vec<i32> = (0..25).collect();
        assert!(paginate(items, 0, 0).is_empty());
    }
}
