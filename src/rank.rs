//! Competition ranking ("1224" style) over a score column already sorted in
//! the requested display direction. Ranks always mean standing by score: the
//! highest score is rank 1 whichever way the listing is ordered, so an
//! ascending listing carries rank numbers counting down from the total.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Assigns a rank to each position of `points`, which must be sorted in
/// `direction` order. Equal scores share a rank; the next distinct score
/// skips ahead by the size of the preceding tie group.
pub fn competition_ranks(points: &[i64], direction: SortDirection) -> Vec<i64> {
    match direction {
        SortDirection::Desc => standing_ranks(points),
        // An ascending listing reversed is a descending one; rank it there
        // and flip the result back.
        SortDirection::Asc => {
            let reversed: Vec<i64> = points.iter().rev().copied().collect();
            let mut ranks = standing_ranks(&reversed);
            ranks.reverse();
            ranks
        }
    }
}

fn standing_ranks(points_desc: &[i64]) -> Vec<i64> {
    let mut ranks = Vec::with_capacity(points_desc.len());
    for (idx, &p) in points_desc.iter().enumerate() {
        if idx > 0 && p == points_desc[idx - 1] {
            ranks.push(ranks[idx - 1]);
        } else {
            ranks.push(idx as i64 + 1);
        }
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_empty_output() {
        assert!(competition_ranks(&[], SortDirection::Desc).is_empty());
        assert!(competition_ranks(&[], SortDirection::Asc).is_empty());
    }

    #[test]
    fn single_entry_is_rank_one() {
        assert_eq!(competition_ranks(&[42], SortDirection::Desc), vec![1]);
        assert_eq!(competition_ranks(&[42], SortDirection::Asc), vec![1]);
    }

    #[test]
    fn all_tied_share_rank_one() {
        assert_eq!(
            competition_ranks(&[7, 7, 7], SortDirection::Desc),
            vec![1, 1, 1]
        );
        assert_eq!(
            competition_ranks(&[7, 7, 7], SortDirection::Asc),
            vec![1, 1, 1]
        );
    }

    #[test]
    fn ties_skip_following_rank() {
        // 10, 10, 5: the tied pair holds rank 1, the next score lands at 3.
        assert_eq!(
            competition_ranks(&[10, 10, 5], SortDirection::Desc),
            vec![1, 1, 3]
        );
        // 9, 8, 8, 7: "1224" shape.
        assert_eq!(
            competition_ranks(&[9, 8, 8, 7], SortDirection::Desc),
            vec![1, 2, 2, 4]
        );
    }

    #[test]
    fn ascending_preserves_standing() {
        // Same cards listed low-to-high: rank values are unchanged, only the
        // order they appear in reverses.
        assert_eq!(
            competition_ranks(&[5, 10, 10], SortDirection::Asc),
            vec![3, 1, 1]
        );
        assert_eq!(
            competition_ranks(&[7, 8, 8, 9], SortDirection::Asc),
            vec![4, 2, 2, 1]
        );
    }

    #[test]
    fn higher_score_never_ranks_worse() {
        let points = [50, 50, 40, 40, 40, 12, 3, 3, 1];
        let ranks = competition_ranks(&points, SortDirection::Desc);
        for i in 1..points.len() {
            if points[i] < points[i - 1] {
                assert!(ranks[i] > ranks[i - 1]);
            } else {
                assert_eq!(ranks[i], ranks[i - 1]);
            }
        }
    }

    #[test]
    fn rank_group_sizes_sum_to_total() {
        let points = [50, 50, 40, 40, 40, 12, 3, 3, 1];
        let ranks = competition_ranks(&points, SortDirection::Desc);
        let distinct: std::collections::BTreeSet<i64> = ranks.iter().copied().collect();
        let total: usize = distinct
            .iter()
            .map(|r| ranks.iter().filter(|x| *x == r).count())
            .sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn directions_agree_on_standing() {
        let desc = [50, 40, 40, 12, 3, 3, 1];
        let asc: Vec<i64> = desc.iter().rev().copied().collect();
        let mut from_asc = competition_ranks(&asc, SortDirection::Asc);
        from_asc.reverse();
        assert_eq!(from_asc, competition_ranks(&desc, SortDirection::Desc));
    }
}
