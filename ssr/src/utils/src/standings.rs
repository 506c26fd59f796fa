use std::cmp::Ordering;
use std::collections::HashSet;

use consts::{ATCODER_ID_WIDTH, ATCODER_BASE, CODECHEF_BASE, CODEFORCES_BASE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::api::{
    atcoder_standings_path, codechef_standings_path, codeforces_standings_path, fetch_ratings,
    ApiError, JsonSource,
};
use crate::profile::Platform;
use crate::ratings::{is_present, list_under, RawRating};
use crate::types::{lenient_list, lenient_text, Cell, TableRow, PLACEHOLDER};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtCoderKind {
    #[default]
    Abc,
    Arc,
    Agc,
}

impl AtCoderKind {
    pub const ALL: [AtCoderKind; 3] = [AtCoderKind::Abc, AtCoderKind::Arc, AtCoderKind::Agc];

    pub fn code(self) -> &'static str {
        match self {
            Self::Abc => "abc",
            Self::Arc => "arc",
            Self::Agc => "agc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Abc => "ABC (Beginner)",
            Self::Arc => "ARC (Regular)",
            Self::Agc => "AGC (Grand)",
        }
    }
}

pub fn pad_atcoder_id(id: &str) -> String {
    format!("{:0>width$}", id.trim(), width = ATCODER_ID_WIDTH)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContestQuery {
    pub platform: Platform,
    pub atcoder_kind: AtCoderKind,
    pub contest_id: String,
}

impl ContestQuery {
    pub fn new(platform: Platform, contest_id: impl Into<String>) -> Self {
        Self {
            platform,
            atcoder_kind: AtCoderKind::default(),
            contest_id: contest_id.into(),
        }
    }

    pub fn with_kind(mut self, kind: AtCoderKind) -> Self {
        self.atcoder_kind = kind;
        self
    }

    pub fn contest_id(&self) -> &str {
        self.contest_id.trim()
    }

    /// e.g. `abc007` for ABC with id `7`
    pub fn atcoder_code(&self) -> String {
        format!("{}{}", self.atcoder_kind.code(), pad_atcoder_id(self.contest_id()))
    }

    pub fn full_standings_link(&self) -> Option<String> {
        let id = self.contest_id();
        if id.is_empty() {
            return None;
        }
        let url = match self.platform {
            Platform::Codeforces => CODEFORCES_BASE.join(&format!("contest/{id}/standings")),
            Platform::CodeChef => CODECHEF_BASE.join(id),
            Platform::AtCoder => ATCODER_BASE.join(&format!("contests/{}/standings", self.atcoder_code())),
        };
        url.ok().map(|u| u.to_string())
    }

    /// Hint shown beside the contest id label
    pub fn id_hint(&self) -> &'static str {
        match self.platform {
            Platform::AtCoder => "(e.g., 350 for ABC350)",
            Platform::Codeforces => "(e.g., 1900 for contest 1900)",
            Platform::CodeChef => "(e.g., START135A)",
        }
    }

    pub fn id_placeholder(&self) -> &'static str {
        match self.platform {
            Platform::AtCoder => "Enter contest number",
            Platform::Codeforces => "Enter contest ID",
            Platform::CodeChef => "Enter contest code",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Rank {
    Position(u64),
    Label(String),
    Missing,
}

impl Rank {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(n) => match n.as_u64() {
                Some(0) => Self::Missing,
                Some(p) => Self::Position(p),
                None => Self::Label(n.to_string()),
            },
            Value::String(s) if s.trim().is_empty() => Self::Missing,
            Value::String(s) => match s.trim().parse::<u64>() {
                Ok(p) if p > 0 => Self::Position(p),
                _ => Self::Label(s.clone()),
            },
            other => Self::Label(other.to_string()),
        }
    }

    pub fn position(&self) -> Option<u64> {
        match self {
            Self::Position(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position(p) => write!(f, "{p}"),
            Self::Label(l) => f.write_str(l),
            Self::Missing => f.write_str(PLACEHOLDER),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContestScores {
    AtCoder {
        performance: Option<String>,
        new_rating: Option<String>,
        diff: Option<String>,
    },
    Codeforces {
        points: Option<String>,
        penalty: Option<String>,
    },
    CodeChef {
        div: Option<String>,
        rating: Option<String>,
        total_score: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContestStandingRow {
    pub platform: Platform,
    pub handle: String,
    pub rank: Rank,
    pub aust_rank: usize,
    pub scores: ContestScores,
}

impl TableRow for ContestStandingRow {
    fn cells(&self) -> Vec<Cell> {
        let handle = Cell::Handle {
            platform: self.platform,
            handle: self.handle.clone(),
        };
        let rank = Cell::text(&self.rank);
        let mut cells = vec![Cell::text(self.aust_rank), handle];
        match &self.scores {
            ContestScores::AtCoder {
                performance,
                new_rating,
                diff,
            } => cells.extend([
                rank,
                Cell::Text(performance.clone()),
                Cell::Text(new_rating.clone()),
                Cell::Text(diff.clone()),
            ]),
            ContestScores::Codeforces { points, penalty } => {
                cells.extend([rank, Cell::Text(points.clone()), Cell::Text(penalty.clone())])
            }
            ContestScores::CodeChef {
                div,
                rating,
                total_score,
            } => cells.extend([
                Cell::Text(div.clone()),
                rank,
                Cell::Text(rating.clone()),
                Cell::Text(total_score.clone()),
            ]),
        }
        cells
    }

    fn row_key(&self) -> String {
        format!("{}-{}", self.aust_rank, self.handle)
    }
}

pub fn standing_columns(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::AtCoder => &["AUST Rank", "Handle", "Rank", "Performance", "New Rating", "Diff"],
        Platform::Codeforces => &["AUST Rank", "Handle", "Rank", "Points", "Penalty"],
        Platform::CodeChef => &["AUST Rank", "Handle", "Div", "Rank", "Rating", "Total Score"],
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AtCoderStandings {
    #[serde(default, deserialize_with = "lenient_text")]
    pub full_contest_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub contest_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub results: Vec<AtCoderResult>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AtCoderResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub handle: Option<String>,
    #[serde(default)]
    pub rank: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub performance: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub new_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub diff: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CodeforcesStandings {
    #[serde(default, deserialize_with = "lenient_text")]
    pub contest_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub global_standings: Vec<CodeforcesResult>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CodeforcesResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub handle: Option<String>,
    #[serde(default)]
    pub rank: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub points: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub penalty: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CodeChefStandings {
    #[serde(default, deserialize_with = "lenient_list")]
    pub standings: Vec<CodeChefResult>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CodeChefResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default, rename = "Div", deserialize_with = "lenient_text")]
    pub div: Option<String>,
    #[serde(default)]
    pub rank: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rating: Option<String>,
    #[serde(default, rename = "totalScore", deserialize_with = "lenient_text")]
    pub total_score: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContestResult {
    pub title: String,
    pub rows: Vec<ContestStandingRow>,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    NoHandles(&'static str),
    #[error("Enter a contest ID to search")]
    MissingContestId,
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub fn normalize_handle(handle: &str) -> String {
    handle.trim().to_lowercase()
}

/// Non-blank usernames from a ratings payload, tolerating the older list keys
pub fn aust_handles(platform: Platform, data: &Value) -> Vec<String> {
    let (keys, top_level): (&[&str], bool) = match platform {
        Platform::AtCoder => (&["ratings_all_atcoder"], false),
        Platform::Codeforces => (&["ratings_all_codeforces", "ratings_all"], true),
        Platform::CodeChef => (&["ratings_all", "ratings"], false),
    };
    list_under::<RawRating>(data, keys, top_level)
        .into_iter()
        .filter(|r| is_present(&r.username))
        .filter_map(|r| r.username)
        .collect()
}

fn by_rank(a: &ContestStandingRow, b: &ContestStandingRow) -> Ordering {
    match (a.rank.position(), b.rank.position()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Keeps AUST rows, orders them by contest rank and numbers them from 1
pub fn relabel_for_aust(
    rows: Vec<ContestStandingRow>,
    aust: &HashSet<String>,
) -> Vec<ContestStandingRow> {
    let mut rows: Vec<_> = rows
        .into_iter()
        .filter(|r| aust.contains(&normalize_handle(&r.handle)))
        .collect();
    rows.sort_by(by_rank);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| ContestStandingRow {
            aust_rank: i + 1,
            ..row
        })
        .collect()
}

impl From<AtCoderResult> for ContestStandingRow {
    fn from(r: AtCoderResult) -> Self {
        Self {
            platform: Platform::AtCoder,
            handle: r.handle.unwrap_or_default(),
            rank: Rank::from_value(&r.rank),
            aust_rank: 0,
            scores: ContestScores::AtCoder {
                performance: r.performance,
                new_rating: r.new_rating,
                diff: r.diff,
            },
        }
    }
}

impl From<CodeforcesResult> for ContestStandingRow {
    fn from(r: CodeforcesResult) -> Self {
        Self {
            platform: Platform::Codeforces,
            handle: r.handle.unwrap_or_default(),
            rank: Rank::from_value(&r.rank),
            aust_rank: 0,
            scores: ContestScores::Codeforces {
                points: r.points,
                penalty: r.penalty,
            },
        }
    }
}

impl From<CodeChefResult> for ContestStandingRow {
    fn from(r: CodeChefResult) -> Self {
        Self {
            platform: Platform::CodeChef,
            handle: r.username.unwrap_or_default(),
            rank: Rank::from_value(&r.rank),
            aust_rank: 0,
            scores: ContestScores::CodeChef {
                div: r.div,
                rating: r.rating,
                total_score: r.total_score,
            },
        }
    }
}

/// Looks up a contest's standings and narrows them to AUST participants.
/// `progress` receives a short status line before each network step.
pub async fn search_contest<S: JsonSource>(
    source: &S,
    query: &ContestQuery,
    progress: impl Fn(&'static str),
) -> Result<ContestResult, SearchError> {
    progress("Preparing search...");
    let id = query.contest_id();
    if id.is_empty() {
        return Err(SearchError::MissingContestId);
    }

    let platform = query.platform;
    progress(match platform {
        Platform::AtCoder => "Fetching AUST AtCoder users...",
        Platform::Codeforces => "Fetching AUST Codeforces users...",
        Platform::CodeChef => "Fetching AUST CodeChef users...",
    });
    let ratings = fetch_ratings(source, platform).await?;
    let handles = aust_handles(platform, &ratings);
    if handles.is_empty() {
        return Err(SearchError::NoHandles(match platform {
            Platform::AtCoder => "No AtCoder handles found",
            _ => "No AUST users found",
        }));
    }
    let aust: HashSet<String> = handles.iter().map(|h| normalize_handle(h)).collect();

    let (title, rows): (String, Vec<ContestStandingRow>) = match platform {
        Platform::AtCoder => {
            progress("Requesting contest standings from AtCoder...");
            let data: AtCoderStandings = source
                .get_json(&atcoder_standings_path(&query.atcoder_code(), &handles))
                .await?;
            let title = data
                .full_contest_name
                .filter(|t| !t.is_empty())
                .or_else(|| data.contest_id.filter(|t| !t.is_empty()))
                .unwrap_or_else(|| "AtCoder Contest".to_string());
            (title, data.results.into_iter().map(Into::into).collect())
        }
        Platform::Codeforces => {
            progress("Fetching global contest standings from Codeforces...");
            let data: CodeforcesStandings = source.get_json(&codeforces_standings_path(id)).await?;
            let title = data
                .contest_name
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Codeforces {id}"));
            (title, data.global_standings.into_iter().map(Into::into).collect())
        }
        Platform::CodeChef => {
            progress("Requesting contest standings from CodeChef...");
            let data: CodeChefStandings = source.get_json(&codechef_standings_path(id)).await?;
            (
                format!("CodeChef {id}"),
                data.standings.into_iter().map(Into::into).collect(),
            )
        }
    };

    Ok(ContestResult {
        title,
        rows: relabel_for_aust(rows, &aust),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde::de::DeserializeOwned;
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct FakeBackend {
        responses: HashMap<String, Value>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn with(mut self, path: &str, body: Value) -> Self {
            self.responses.insert(path.to_string(), body);
            self
        }
    }

    impl JsonSource for FakeBackend {
        async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
            self.requested.borrow_mut().push(path.to_string());
            let body = self.responses.get(path).cloned().ok_or(ApiError::Status(404))?;
            serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
        }
    }

    #[test]
    fn atcoder_ids_are_zero_padded() {
        assert_eq!(pad_atcoder_id("7"), "007");
        assert_eq!(pad_atcoder_id(" 42 "), "042");
        assert_eq!(pad_atcoder_id("350"), "350");
        assert_eq!(pad_atcoder_id("1000"), "1000");
        let q = ContestQuery::new(Platform::AtCoder, "7").with_kind(AtCoderKind::Arc);
        assert_eq!(q.atcoder_code(), "arc007");
    }

    #[test]
    fn full_standings_links() {
        assert_eq!(
            ContestQuery::new(Platform::Codeforces, "1900").full_standings_link().as_deref(),
            Some("https://codeforces.com/contest/1900/standings")
        );
        assert_eq!(
            ContestQuery::new(Platform::CodeChef, "START135A").full_standings_link().as_deref(),
            Some("https://www.codechef.com/START135A")
        );
        assert_eq!(
            ContestQuery::new(Platform::AtCoder, "50").full_standings_link().as_deref(),
            Some("https://atcoder.jp/contests/abc050/standings")
        );
        assert_eq!(ContestQuery::new(Platform::AtCoder, "  ").full_standings_link(), None);
    }

    #[test]
    fn rank_reads_numbers_and_text() {
        assert_eq!(Rank::from_value(&json!(3)), Rank::Position(3));
        assert_eq!(Rank::from_value(&json!(" 12 ")), Rank::Position(12));
        assert_eq!(Rank::from_value(&json!("DQ")), Rank::Label("DQ".into()));
        assert_eq!(Rank::from_value(&Value::Null).to_string(), PLACEHOLDER);
    }

    #[test]
    fn numeric_zero_rank_is_missing() {
        assert_eq!(Rank::from_value(&json!(0)), Rank::Missing);
        assert_eq!(Rank::from_value(&json!(0)).to_string(), PLACEHOLDER);
        assert_eq!(Rank::from_value(&json!("0")), Rank::Label("0".into()));
    }

    #[test]
    fn relabel_filters_sorts_and_renumbers() {
        let rows = ["Carol", "dave", "alice", "outsider", "bob"]
            .iter()
            .zip([json!(40), json!("DQ"), json!(7), json!(1), json!("15")])
            .map(|(h, rank)| {
                ContestStandingRow::from(CodeforcesResult {
                    handle: Some(h.to_string()),
                    rank,
                    ..Default::default()
                })
            })
            .collect();
        let aust = ["alice", "bob", "carol", "dave"].map(String::from).into_iter().collect();
        let ranked = relabel_for_aust(rows, &aust);
        let order: Vec<_> = ranked.iter().map(|r| (r.aust_rank, r.handle.as_str())).collect();
        assert_eq!(order, vec![(1, "alice"), (2, "bob"), (3, "Carol"), (4, "dave")]);
    }

    #[test]
    fn handles_fall_back_to_older_keys() {
        let cf = json!([{"username": "a"}, {"username": ""}, {"username": "b"}]);
        assert_eq!(aust_handles(Platform::Codeforces, &cf), vec!["a", "b"]);
        let cc = json!({"ratings": [{"username": "c"}]});
        assert_eq!(aust_handles(Platform::CodeChef, &cc), vec!["c"]);
        assert!(aust_handles(Platform::AtCoder, &cf).is_empty());
    }

    #[tokio::test]
    async fn atcoder_search_sends_handles_and_relabels() {
        let backend = FakeBackend::default()
            .with(
                "/atcoder_ratings_all",
                json!({"ratings_all_atcoder": [{"username": "Alice"}, {"username": "bob"}, {"username": " "}]}),
            )
            .with(
                "/atcoder_standings?contestId=abc350&handles=Alice%2Cbob",
                json!({
                    "fullContestName": "AtCoder Beginner Contest 350",
                    "results": [
                        {"handle": "bob", "rank": 120, "performance": 1500, "newRating": 1400, "diff": "+20"},
                        {"handle": "stranger", "rank": 1},
                        {"handle": "alice", "rank": "45", "performance": 1800}
                    ]
                }),
            );
        let steps = RefCell::new(Vec::new());
        let query = ContestQuery::new(Platform::AtCoder, "350");
        let result = search_contest(&backend, &query, |s| steps.borrow_mut().push(s))
            .await
            .unwrap();

        assert_eq!(result.title, "AtCoder Beginner Contest 350");
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].handle, "alice");
        assert_eq!(result.rows[0].aust_rank, 1);
        assert_eq!(result.rows[1].handle, "bob");
        assert_eq!(
            result.rows[1].cells().iter().map(Cell::display).collect::<Vec<_>>(),
            vec!["2", "bob", "120", "1500", "1400", "+20"]
        );
        assert_eq!(steps.borrow().last(), Some(&"Requesting contest standings from AtCoder..."));
    }

    #[tokio::test]
    async fn atcoder_title_falls_back_past_blank_name() {
        let roster = json!({"ratings_all_atcoder": [{"username": "alice"}]});
        let path = "/atcoder_standings?contestId=abc350&handles=alice";
        let query = ContestQuery::new(Platform::AtCoder, "350");

        let backend = FakeBackend::default()
            .with("/atcoder_ratings_all", roster.clone())
            .with(
                path,
                json!({
                    "fullContestName": "",
                    "contestId": "abc350",
                    "results": [{"handle": "alice", "rank": 3}]
                }),
            );
        let result = search_contest(&backend, &query, |_| {}).await.unwrap();
        assert_eq!(result.title, "abc350");
        assert_eq!(result.rows.len(), 1);

        let backend = FakeBackend::default()
            .with("/atcoder_ratings_all", roster)
            .with(path, json!({"fullContestName": "", "contestId": "", "results": []}));
        let result = search_contest(&backend, &query, |_| {}).await.unwrap();
        assert_eq!(result.title, "AtCoder Contest");
        assert!(result.rows.is_empty());
    }

    #[tokio::test]
    async fn codeforces_search_defaults_title() {
        let backend = FakeBackend::default()
            .with("/codeforces_ratings_all", json!({"ratings_all_codeforces": [{"username": "x"}]}))
            .with(
                "/codeforces_standings/1900",
                json!({"global_standings": [{"handle": "X", "rank": 9, "points": 3000, "penalty": 0}]}),
            );
        let query = ContestQuery::new(Platform::Codeforces, "1900");
        let result = search_contest(&backend, &query, |_| {}).await.unwrap();
        assert_eq!(result.title, "Codeforces 1900");
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].aust_rank, 1);
    }

    #[tokio::test]
    async fn empty_roster_fails_before_standings_request() {
        let backend = FakeBackend::default().with("/codechef_ratings_all", json!({"ratings_all": []}));
        let query = ContestQuery::new(Platform::CodeChef, "START135A");
        let err = search_contest(&backend, &query, |_| {}).await.unwrap_err();
        assert_eq!(err.to_string(), "No AUST users found");
        assert_eq!(backend.requested.borrow().len(), 1);
    }

    #[tokio::test]
    async fn backend_failures_surface_as_messages() {
        let backend = FakeBackend::default()
            .with("/codechef_ratings_all", json!({"ratings_all": [{"username": "chef"}]}));
        let query = ContestQuery::new(Platform::CodeChef, "START1");
        let err = search_contest(&backend, &query, |_| {}).await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }
}
