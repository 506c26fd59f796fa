use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Utc};
use consts::{ATCODER_BASE, BD_UTC_OFFSET_SECS, CODEFORCES_BASE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::profile::Platform;
use crate::types::{lenient_list, lenient_text, PLACEHOLDER};

const CODECHEF_PREFIX: &str = "Starts in ";

static CODEFORCES_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z]{3})\s+(\d{1,2})\s+(\d{4})\s+(\d{1,2}):(\d{2})\s*(?:UTC\s*(?:([+-])(\d{1,2})(?::(\d{2}))?)?)?\s*$")
        .unwrap()
});
static CODECHEF_DAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*Day").unwrap());
static CODECHEF_HOURS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*Hrs?").unwrap());
static CODECHEF_MINS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*Min").unwrap());
static ATCODER_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)atcoder\s+(beginner|regular|heuristic|grand)\s+contest\s+(\d+)").unwrap()
});

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingContest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub contest_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub contest_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub contest_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpcomingResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub contests: Vec<UpcomingContest>,
}

impl UpcomingContest {
    pub fn platform(&self) -> Option<Platform> {
        self.platform.as_deref().and_then(Platform::from_label)
    }

    pub fn name(&self) -> &str {
        self.contest_name.as_deref().unwrap_or_default()
    }

    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        parse_start(self.start_time.as_deref()?, self.platform()?, now)
    }
}

fn parse_atcoder(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.to_utc());
    }
    ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M%z", "%Y-%m-%dT%H:%M:%S%z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.to_utc())
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|naive| naive.and_utc())
        })
}

fn parse_codeforces(text: &str) -> Option<DateTime<Utc>> {
    let cleaned = text.replace('/', " ");
    let caps = CODEFORCES_START.captures(&cleaned)?;
    let naive = NaiveDateTime::parse_from_str(
        &format!("{} {} {} {}:{}", &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]),
        "%b %d %Y %H:%M",
    )
    .ok()?;
    let offset_secs = match caps.get(6) {
        Some(sign) => {
            let hours: i32 = caps[7].parse().ok()?;
            let minutes: i32 = caps.get(8).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
            let secs = hours * 3600 + minutes * 60;
            if sign.as_str() == "-" {
                -secs
            } else {
                secs
            }
        }
        None => 0,
    };
    FixedOffset::east_opt(offset_secs)?
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.to_utc())
}

fn captured(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)
        .map_or(Some(0), |caps| caps[1].parse().ok())
}

fn parse_codechef(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if !text.starts_with(CODECHEF_PREFIX) {
        return None;
    }
    let offset = TimeDelta::try_days(captured(&CODECHEF_DAYS, text)?)?
        .checked_add(&TimeDelta::try_hours(captured(&CODECHEF_HOURS, text)?)?)?
        .checked_add(&TimeDelta::try_minutes(captured(&CODECHEF_MINS, text)?)?)?;
    now.checked_add_signed(offset)
}

/// Start instant of a listed contest; CodeChef only sends a relative countdown
pub fn parse_start(start_time: &str, platform: Platform, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match platform {
        Platform::AtCoder => parse_atcoder(start_time),
        Platform::Codeforces => parse_codeforces(start_time),
        Platform::CodeChef => parse_codechef(start_time, now),
    }
}

/// Soonest first; contests without a readable start go last in their original order
pub fn sort_upcoming(contests: &mut [UpcomingContest], now: DateTime<Utc>) {
    contests.sort_by_cached_key(|c| {
        let start = c.start(now);
        (start.is_none(), start)
    });
}

pub fn starts_in(contest: &UpcomingContest, now: DateTime<Utc>) -> String {
    let Some(start_time) = contest.start_time.as_deref().filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    if contest.platform() == Some(Platform::CodeChef) {
        return start_time.replacen(CODECHEF_PREFIX, "", 1);
    }
    let Some(start) = contest.start(now) else {
        return PLACEHOLDER.to_string();
    };
    let remaining = start - now;
    if remaining <= TimeDelta::zero() {
        return "Started".to_string();
    }
    let parts = [
        (remaining.num_days(), "d"),
        (remaining.num_hours() % 24, "h"),
        (remaining.num_minutes() % 60, "m"),
    ];
    let text = parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n}{unit}"))
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        "Less than a minute".to_string()
    } else {
        text
    }
}

pub fn duration(contest: &UpcomingContest) -> String {
    if let Some(length) = contest.length.as_deref().filter(|l| !l.is_empty()) {
        return length.to_string();
    }
    let title = contest.name().to_lowercase();
    let known: &[(&str, &str)] = match contest.platform() {
        Some(Platform::AtCoder) => &[
            ("beginner", "01:40"),
            ("regular", "02:30"),
            ("heuristic", "04:00"),
            ("grand", "03:00"),
        ],
        Some(Platform::CodeChef) => &[("starters", "02:00"), ("weekend dev", "1 Day")],
        _ => &[],
    };
    known
        .iter()
        .find(|(needle, _)| title.contains(needle))
        .map_or(PLACEHOLDER, |&(_, length)| length)
        .to_string()
}

fn atcoder_type(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "beginner" => "abc",
        "regular" => "arc",
        "heuristic" => "ahc",
        _ => "agc",
    }
}

pub fn contest_link(contest: &UpcomingContest) -> Option<String> {
    match contest.platform()? {
        Platform::CodeChef => contest.contest_url.clone().filter(|u| !u.trim().is_empty()),
        Platform::Codeforces => {
            let id = contest.contest_id.as_deref().filter(|id| !id.trim().is_empty())?;
            CODEFORCES_BASE
                .join(&format!("contests/{}", id.trim()))
                .ok()
                .map(|u| u.to_string())
        }
        Platform::AtCoder => {
            let caps = ATCODER_NUMBER.captures(contest.name())?;
            ATCODER_BASE
                .join(&format!("contests/{}{}", atcoder_type(&caps[1]), &caps[2]))
                .ok()
                .map(|u| u.to_string())
        }
    }
}

/// e.g. `15 Oct 2026, 17:35`, in Bangladesh time
pub fn format_start(start: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(BD_UTC_OFFSET_SECS) {
        Some(bd) => start.with_timezone(&bd).format("%-d %b %Y, %H:%M").to_string(),
        None => start.format("%-d %b %Y, %H:%M").to_string(),
    }
}

pub fn display_start(contest: &UpcomingContest, now: DateTime<Utc>) -> String {
    contest
        .start(now)
        .map_or_else(|| PLACEHOLDER.to_string(), format_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
    }

    fn contest(platform: &str, name: &str, start: &str) -> UpcomingContest {
        UpcomingContest {
            platform: Some(platform.into()),
            contest_name: Some(name.into()),
            start_time: Some(start.into()),
            ..Default::default()
        }
    }

    #[test]
    fn atcoder_accepts_offset_and_iso_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        for text in [
            "2026-10-17T21:00:00+09:00",
            "2026-10-17 21:00:00+0900",
            "2026-10-17T12:00:00Z",
            "2026-10-17 12:00:00",
        ] {
            assert_eq!(parse_start(text, Platform::AtCoder, now()), Some(expected), "{text}");
        }
        assert_eq!(parse_start("soon", Platform::AtCoder, now()), None);
    }

    #[test]
    fn codeforces_honours_utc_offset() {
        let utc = Utc.with_ymd_and_hms(2026, 10, 15, 14, 35, 0).unwrap();
        assert_eq!(parse_start("Oct/15/2026 14:35", Platform::Codeforces, now()), Some(utc));
        assert_eq!(parse_start("Oct/15/2026 17:35UTC+3", Platform::Codeforces, now()), Some(utc));
        assert_eq!(
            parse_start("Oct/15/2026 20:05 UTC+5:30", Platform::Codeforces, now()),
            Some(utc)
        );
        assert_eq!(parse_start("next week", Platform::Codeforces, now()), None);
    }

    #[test]
    fn codechef_counts_from_now() {
        let start = parse_start("Starts in 2 Days 3 Hrs 15 Min", Platform::CodeChef, now());
        assert_eq!(start, Some(Utc.with_ymd_and_hms(2026, 10, 16, 15, 15, 0).unwrap()));
        let start = parse_start("Starts in 1 Hr", Platform::CodeChef, now());
        assert_eq!(start, Some(Utc.with_ymd_and_hms(2026, 10, 14, 13, 0, 0).unwrap()));
        assert_eq!(parse_start("2026-10-16", Platform::CodeChef, now()), None);
    }

    #[test]
    fn sort_puts_unreadable_last() {
        let mut contests = vec![
            contest("Codeforces", "late", "Oct/20/2026 14:35"),
            contest("CodeChef", "unknown", "Ended"),
            contest("CodeChef", "soon", "Starts in 0 Days 2 Hrs 0 Min"),
            contest("Topcoder", "other", "whenever"),
            contest("AtCoder", "mid", "2026-10-17T21:00:00+09:00"),
        ];
        sort_upcoming(&mut contests, now());
        let names: Vec<_> = contests.iter().map(UpcomingContest::name).collect();
        assert_eq!(names, vec!["soon", "mid", "late", "unknown", "other"]);
    }

    #[test]
    fn starts_in_text() {
        let c = contest("Codeforces", "x", "Oct/16/2026 15:30");
        assert_eq!(starts_in(&c, now()), "2d 3h 30m");
        let c = contest("Codeforces", "x", "Oct/14/2026 15:00");
        assert_eq!(starts_in(&c, now()), "3h");
        let c = contest("AtCoder", "x", "2026-10-14T12:00:30Z");
        assert_eq!(starts_in(&c, now()), "Less than a minute");
        let c = contest("AtCoder", "x", "2026-10-13T12:00:00Z");
        assert_eq!(starts_in(&c, now()), "Started");
        let c = contest("CodeChef", "x", "Starts in 1 Day 2 Hrs");
        assert_eq!(starts_in(&c, now()), "1 Day 2 Hrs");
        assert_eq!(starts_in(&UpcomingContest::default(), now()), PLACEHOLDER);
    }

    #[test]
    fn duration_prefers_length_then_title() {
        let mut c = contest("AtCoder", "AtCoder Regular Contest 190", "");
        assert_eq!(duration(&c), "02:30");
        c.length = Some("01:00".into());
        assert_eq!(duration(&c), "01:00");
        assert_eq!(duration(&contest("CodeChef", "Weekend Dev Challenge", "")), "1 Day");
        assert_eq!(duration(&contest("Codeforces", "Codeforces Round", "")), PLACEHOLDER);
    }

    #[test]
    fn links_per_platform() {
        let c = contest("AtCoder", "AtCoder Beginner Contest 412", "");
        assert_eq!(contest_link(&c).as_deref(), Some("https://atcoder.jp/contests/abc412"));
        let c = contest("AtCoder", "AtCoder Heuristic Contest 050", "");
        assert_eq!(contest_link(&c).as_deref(), Some("https://atcoder.jp/contests/ahc050"));
        assert_eq!(contest_link(&contest("AtCoder", "AtCoder World Tour", "")), None);

        let mut cf = contest("Codeforces", "Round", "");
        assert_eq!(contest_link(&cf), None);
        cf.contest_id = Some("2150".into());
        assert_eq!(contest_link(&cf).as_deref(), Some("https://codeforces.com/contests/2150"));

        let mut cc = contest("CodeChef", "Starters 200", "");
        assert_eq!(contest_link(&cc), None);
        cc.contest_url = Some("https://www.codechef.com/START200".into());
        assert_eq!(contest_link(&cc).as_deref(), Some("https://www.codechef.com/START200"));
    }

    #[test]
    fn start_is_shown_in_bangladesh_time() {
        let start = Utc.with_ymd_and_hms(2026, 10, 5, 14, 35, 0).unwrap();
        assert_eq!(format_start(start), "5 Oct 2026, 20:35");
        assert_eq!(display_start(&contest("AtCoder", "x", "bad"), now()), PLACEHOLDER);
    }

    #[test]
    fn response_tolerates_odd_payloads() {
        let r: UpcomingResponse = serde_json::from_value(json!({
            "contests": [{"platform": "Codeforces", "contestName": "Round", "contestId": 2150}]
        }))
        .unwrap();
        assert_eq!(r.contests[0].contest_id.as_deref(), Some("2150"));
        let r: UpcomingResponse = serde_json::from_value(json!({"contests": null})).unwrap();
        assert!(r.contests.is_empty());
    }
}
