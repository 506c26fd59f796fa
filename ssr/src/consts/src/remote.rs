use once_cell::sync::Lazy;
use reqwest::Url;

const DEFAULT_BACKEND_BASE: &str = "https://cp-standings-be.austpic.com";

pub static BACKEND_BASE: Lazy<Url> = Lazy::new(|| {
    Url::parse(option_env!("AUST_CP_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_BASE)).unwrap()
});

pub static CODEFORCES_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("https://codeforces.com").unwrap());
pub static ATCODER_BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://atcoder.jp").unwrap());
pub static CODECHEF_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("https://www.codechef.com").unwrap());
