//! Per-column defaults for absent values.
//!
//! The upstream dataset leaves many columns NULL (unranked games, games
//! without a recorded year or player count, games with no linked
//! categories). The site expects every record to carry a displayable value
//! for the mapped columns, so NULLs are substituted before serialization.

use meeple_core::{Row, Value};

/// Default value for a column, or None for columns that pass NULL through
pub fn default_for_column(column: &str) -> Option<Value> {
    match column {
        "year_published"
        | "min_players"
        | "max_players"
        | "age"
        | "playing_time"
        | "min_playing_time"
        | "max_playing_time"
        | "old_rank"
        | "categories"
        | "mechanics"
        | "publishers" => Some(Value::String("Unspecified".into())),
        "average_weight" | "average" | "bayes_average" => Some(Value::Float64(0.0)),
        "users_rated" => Some(Value::Int64(0)),
        "description" | "thumbnail" | "image" => Some(Value::String(String::new())),
        "rank" => Some(Value::String("Unranked".into())),
        _ => None,
    }
}

/// Replace every NULL value in the row with its column's default.
///
/// Columns outside the mapping keep their NULL; present values are never
/// touched.
pub fn normalize_row(row: &mut Row) {
    for idx in 0..row.values.len() {
        if row.values[idx].is_null() {
            let column = &row.columns()[idx];
            if let Some(default) = default_for_column(column) {
                row.values[idx] = default;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mapping_matches_site_expectations() {
        assert_eq!(
            default_for_column("year_published"),
            Some(Value::String("Unspecified".into()))
        );
        assert_eq!(default_for_column("rank"), Some(Value::String("Unranked".into())));
        assert_eq!(default_for_column("average"), Some(Value::Float64(0.0)));
        assert_eq!(default_for_column("users_rated"), Some(Value::Int64(0)));
        assert_eq!(
            default_for_column("description"),
            Some(Value::String(String::new()))
        );
        assert_eq!(default_for_column("id"), None);
        assert_eq!(default_for_column("name"), None);
    }

    #[test]
    fn test_normalize_row_fills_nulls_only() {
        let mut row = Row::new(
            vec![
                "id".into(),
                "name".into(),
                "year_published".into(),
                "rank".into(),
                "users_rated".into(),
            ],
            vec![
                Value::Int64(174430),
                Value::String("Gloomhaven".into()),
                Value::Null,
                Value::Null,
                Value::Int64(60_000),
            ],
        );

        normalize_row(&mut row);

        assert_eq!(row.values[0], Value::Int64(174430));
        assert_eq!(row.values[1], Value::String("Gloomhaven".into()));
        assert_eq!(row.values[2], Value::String("Unspecified".into()));
        assert_eq!(row.values[3], Value::String("Unranked".into()));
        assert_eq!(row.values[4], Value::Int64(60_000));
    }

    #[test]
    fn test_normalize_row_leaves_unmapped_nulls() {
        let mut row = Row::new(
            vec!["id".into(), "name".into()],
            vec![Value::Int64(1), Value::Null],
        );
        normalize_row(&mut row);
        assert_eq!(row.values[1], Value::Null);
    }
}
