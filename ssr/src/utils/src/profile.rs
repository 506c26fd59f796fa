use consts::{endpoints, ATCODER_BASE, CODECHEF_BASE, CODEFORCES_BASE};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    AtCoder,
    Codeforces,
    CodeChef,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::AtCoder, Platform::Codeforces, Platform::CodeChef];

    pub fn label(self) -> &'static str {
        match self {
            Self::AtCoder => "AtCoder",
            Self::Codeforces => "Codeforces",
            Self::CodeChef => "CodeChef",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::AtCoder => "atcoder",
            Self::Codeforces => "codeforces",
            Self::CodeChef => "codechef",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::AtCoder => "AC",
            Self::Codeforces => "CF",
            Self::CodeChef => "CC",
        }
    }

    pub fn ratings_endpoint(self) -> &'static str {
        match self {
            Self::AtCoder => endpoints::ATCODER_RATINGS,
            Self::Codeforces => endpoints::CODEFORCES_RATINGS,
            Self::CodeChef => endpoints::CODECHEF_RATINGS,
        }
    }

    /// Case-insensitive match on label or slug
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label) || p.slug() == label)
    }

    fn profile_base(self) -> (&'static Url, &'static str) {
        match self {
            Self::AtCoder => (&*ATCODER_BASE, "users"),
            Self::Codeforces => (&*CODEFORCES_BASE, "profile"),
            Self::CodeChef => (&*CODECHEF_BASE, "users"),
        }
    }

    /// Public profile page for `handle`, or `#` when there is nothing to link
    pub fn profile_url(self, handle: &str) -> String {
        if handle.is_empty() {
            return "#".to_string();
        }
        let (base, segment) = self.profile_base();
        base.join(&format!("{segment}/{}", urlencoding::encode(handle)))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| "#".to_string())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_urls_per_platform() {
        assert_eq!(
            Platform::Codeforces.profile_url("tourist"),
            "https://codeforces.com/profile/tourist"
        );
        assert_eq!(
            Platform::AtCoder.profile_url("aust_coder"),
            "https://atcoder.jp/users/aust_coder"
        );
        assert_eq!(
            Platform::CodeChef.profile_url("a b"),
            "https://www.codechef.com/users/a%20b"
        );
        assert_eq!(Platform::CodeChef.profile_url(""), "#");
    }

    #[test]
    fn labels_round_trip_loosely() {
        assert_eq!(Platform::from_label("codechef"), Some(Platform::CodeChef));
        assert_eq!(Platform::from_label(" AtCoder "), Some(Platform::AtCoder));
        assert_eq!(Platform::from_label("LeetCode"), None);
    }
}
