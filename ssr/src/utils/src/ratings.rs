use std::cmp::Ordering;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::profile::Platform;
use crate::types::{lenient_text, Cell, TableRow, PLACEHOLDER};

const ATCODER_LIST_KEYS: &[&str] = &["ratings_all_atcoder"];
const CODEFORCES_LIST_KEYS: &[&str] = &["ratings_all_codeforces"];
const CODECHEF_LIST_KEYS: &[&str] = &["ratings_all"];

/// One entry of a `*_ratings_all` list as the backend sends it
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawRating {
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default)]
    pub rating: Value,
    #[serde(default, rename = "maxRating")]
    pub max_rating: Value,
    #[serde(default, rename = "contestParticipated")]
    pub contest_participated: Value,
    #[serde(default)]
    pub rating_digit: Value,
    #[serde(default)]
    pub rating_star: Value,
    #[serde(default)]
    pub global_rank: Value,
    #[serde(default)]
    pub country_rank: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RatingDetail {
    AtCoder,
    Codeforces {
        max_rating: Option<u64>,
        contests_participated: u64,
    },
    CodeChef {
        rating_star: String,
        global_rank: String,
        country_rank: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingRow {
    pub platform: Platform,
    /// 1-based position once sorted; 0 until [`with_aust_rank`] runs
    pub aust_rank: usize,
    pub username: String,
    pub rating: u64,
    pub detail: RatingDetail,
}

impl TableRow for RatingRow {
    fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::text(self.aust_rank),
            Cell::Handle {
                platform: self.platform,
                handle: self.username.clone(),
            },
            Cell::text(self.rating),
        ];
        match &self.detail {
            RatingDetail::AtCoder => {}
            RatingDetail::Codeforces { max_rating, .. } => cells.push(Cell::maybe(*max_rating)),
            RatingDetail::CodeChef {
                rating_star,
                global_rank,
                ..
            } => {
                cells.push(Cell::text(rating_star));
                cells.push(Cell::text(global_rank));
            }
        }
        cells
    }

    fn row_key(&self) -> String {
        format!("{}-{}", self.username, self.aust_rank)
    }
}

pub fn rating_columns(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::AtCoder => &["AUST Rank", "Handle", "Rating"],
        Platform::Codeforces => &["AUST Rank", "Handle", "Rating", "Max Rating"],
        Platform::CodeChef => &["AUST Rank", "Handle", "Rating", "Star", "Global Rank"],
    }
}

/// Keeps only the decimal digits of the value's text form; `0` when none remain
pub fn digits_only(value: &Value) -> u64 {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => return 0,
        other => other.to_string(),
    };
    text.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// Text of a value, treating empty, zero, false and null as absent
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Reads the first array found under `keys`; with `top_level` a bare array also counts
pub(crate) fn list_under<T: DeserializeOwned>(data: &Value, keys: &[&str], top_level: bool) -> Vec<T> {
    let list = keys
        .iter()
        .find_map(|key| data.get(key).and_then(Value::as_array))
        .or_else(|| top_level.then(|| data.as_array()).flatten());
    list.map(|items| {
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect()
    })
    .unwrap_or_default()
}

pub(crate) fn is_present(username: &Option<String>) -> bool {
    username.as_deref().is_some_and(|u| !u.trim().is_empty())
}

pub fn parse_atcoder_ratings(data: &Value) -> Vec<RatingRow> {
    list_under::<RawRating>(data, ATCODER_LIST_KEYS, false)
        .into_iter()
        .filter(|entry| is_present(&entry.username))
        .map(|entry| RatingRow {
            platform: Platform::AtCoder,
            aust_rank: 0,
            username: entry.username.unwrap_or_default(),
            rating: digits_only(&entry.rating),
            detail: RatingDetail::AtCoder,
        })
        .collect()
}

pub fn parse_codeforces_ratings(data: &Value) -> Vec<RatingRow> {
    list_under::<RawRating>(data, CODEFORCES_LIST_KEYS, false)
        .into_iter()
        .map(|entry| RatingRow {
            platform: Platform::Codeforces,
            aust_rank: 0,
            username: entry.username.unwrap_or_default(),
            rating: digits_only(&entry.rating),
            detail: RatingDetail::Codeforces {
                max_rating: (!entry.max_rating.is_null()).then(|| digits_only(&entry.max_rating)),
                contests_participated: count(&entry.contest_participated),
            },
        })
        .collect()
}

pub fn parse_codechef_ratings(data: &Value) -> Vec<RatingRow> {
    let or_placeholder = |v: &Value| truthy_text(v).unwrap_or_else(|| PLACEHOLDER.to_string());
    list_under::<RawRating>(data, CODECHEF_LIST_KEYS, false)
        .into_iter()
        .map(|entry| RatingRow {
            platform: Platform::CodeChef,
            aust_rank: 0,
            username: entry.username.clone().unwrap_or_default(),
            rating: digits_only(&entry.rating_digit),
            detail: RatingDetail::CodeChef {
                rating_star: or_placeholder(&entry.rating_star),
                global_rank: or_placeholder(&entry.global_rank),
                country_rank: or_placeholder(&entry.country_rank),
            },
        })
        .collect()
}

pub fn parse_ratings(platform: Platform, data: &Value) -> Vec<RatingRow> {
    match platform {
        Platform::AtCoder => parse_atcoder_ratings(data),
        Platform::Codeforces => parse_codeforces_ratings(data),
        Platform::CodeChef => parse_codechef_ratings(data),
    }
}

pub(crate) fn compare_handles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Rating descending, ties by handle
pub fn sort_for_standings(rows: &mut [RatingRow]) {
    rows.sort_by(|x, y| {
        y.rating
            .cmp(&x.rating)
            .then_with(|| compare_handles(&x.username, &y.username))
    });
}

pub fn with_aust_rank(rows: Vec<RatingRow>) -> Vec<RatingRow> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| RatingRow {
            aust_rank: i + 1,
            ..row
        })
        .collect()
}

/// Parse, sort and rank a ratings payload for the overall standings table
pub fn overall_standings(platform: Platform, data: &Value) -> Vec<RatingRow> {
    let mut rows = parse_ratings(platform, data);
    sort_for_standings(&mut rows);
    with_aust_rank(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only(&json!("1,534")), 1534);
        assert_eq!(digits_only(&json!(1820)), 1820);
        assert_eq!(digits_only(&json!("4★ 1820")), 41820);
        assert_eq!(digits_only(&json!("unrated")), 0);
        assert_eq!(digits_only(&Value::Null), 0);
    }

    #[test]
    fn atcoder_drops_blank_usernames() {
        let data = json!({
            "ratings_all_atcoder": [
                {"username": "alice", "rating": "1200"},
                {"username": "   ", "rating": 900},
                {"rating": 800},
                {"username": "bob", "rating": null}
            ]
        });
        let rows = parse_atcoder_ratings(&data);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].username, "alice");
        assert_eq!(rows[0].rating, 1200);
        assert_eq!(rows[1].rating, 0);
    }

    #[test]
    fn missing_list_parses_empty() {
        assert!(parse_atcoder_ratings(&json!({})).is_empty());
        assert!(parse_codeforces_ratings(&json!({"ratings_all_codeforces": "nope"})).is_empty());
        assert!(parse_codechef_ratings(&Value::Null).is_empty());
    }

    #[test]
    fn codeforces_keeps_counts_and_max() {
        let data = json!({
            "ratings_all_codeforces": [
                {"username": "x", "rating": "1500", "contestParticipated": 12, "maxRating": 1650},
                {"username": "y", "rating": 1400}
            ]
        });
        let rows = parse_codeforces_ratings(&data);
        assert_eq!(
            rows[0].detail,
            RatingDetail::Codeforces {
                max_rating: Some(1650),
                contests_participated: 12
            }
        );
        assert_eq!(
            rows[1].detail,
            RatingDetail::Codeforces {
                max_rating: None,
                contests_participated: 0
            }
        );
        assert_eq!(rows[1].cells()[3], Cell::Text(None));
    }

    #[test]
    fn codechef_defaults_to_placeholder() {
        let data = json!({
            "ratings_all": [
                {"username": "chef", "rating_digit": "1876?", "rating_star": "3★", "global_rank": "", "country_rank": 0}
            ]
        });
        let rows = parse_codechef_ratings(&data);
        assert_eq!(rows[0].rating, 1876);
        assert_eq!(
            rows[0].detail,
            RatingDetail::CodeChef {
                rating_star: "3★".into(),
                global_rank: PLACEHOLDER.into(),
                country_rank: PLACEHOLDER.into(),
            }
        );
    }

    #[test]
    fn overall_sorts_by_rating_then_handle_and_ranks() {
        let data = json!({
            "ratings_all_codeforces": [
                {"username": "zed", "rating": 1500},
                {"username": "Amy", "rating": 1500},
                {"username": "top", "rating": 2100},
                {"username": "low", "rating": "900"}
            ]
        });
        let rows = overall_standings(Platform::Codeforces, &data);
        let order: Vec<_> = rows.iter().map(|r| (r.aust_rank, r.username.as_str())).collect();
        assert_eq!(order, vec![(1, "top"), (2, "Amy"), (3, "zed"), (4, "low")]);
    }

    #[test]
    fn cells_follow_column_layout() {
        for platform in Platform::ALL {
            let data = json!({
                "ratings_all_atcoder": [{"username": "u", "rating": 1}],
                "ratings_all_codeforces": [{"username": "u", "rating": 1}],
                "ratings_all": [{"username": "u", "rating_digit": 1}],
            });
            let rows = overall_standings(platform, &data);
            assert_eq!(rows[0].cells().len(), rating_columns(platform).len());
        }
    }
}
