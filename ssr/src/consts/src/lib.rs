mod limits;
mod remote;

pub use limits::*;
pub use remote::*;

pub const SITE_NAME: &str = "AUST CP";
pub const SITE_TITLE: &str = "AUST Contest Standings";
pub const INSTITUTION: &str = "Ahsanullah University of Science and Technology (AUST)";
pub const ADMIN_EMAIL: &str = "apuorgho7@gmail.com";

/// Rotated in the overall standings loading box while a platform is fetched
pub const LOADING_MESSAGES: [&str; 5] = [
    "This may take a few seconds...",
    "Finding AUST users...",
    "Collecting latest standings...",
    "Sorting by rating...",
    "Finalizing data — almost ready...",
];

pub mod endpoints {
    pub const ATCODER_RATINGS: &str = "/atcoder_ratings_all";
    pub const CODEFORCES_RATINGS: &str = "/codeforces_ratings_all";
    pub const CODECHEF_RATINGS: &str = "/codechef_ratings_all";
    pub const ATCODER_STANDINGS: &str = "/atcoder_standings";
    pub const CODEFORCES_STANDINGS: &str = "/codeforces_standings";
    pub const CODECHEF_STANDINGS: &str = "/codechef_standings";
    pub const UPCOMING_CONTESTS: &str = "/upcoming_contests";
}

pub mod social {
    pub const FACEBOOK: &str = "https://facebook.com";
    pub const GITHUB: &str = "https://github.com";
    pub const LINKEDIN: &str = "https://linkedin.com";
}

pub mod relay {
    /// Env var overriding where registration forms are relayed
    pub const REGISTRATION_RELAY_ENV: &str = "REGISTRATION_RELAY_URL";
    pub const REPORT_RELAY_ENV: &str = "REPORT_RELAY_URL";
    pub const DEFAULT_REGISTRATION_RELAY: &str =
        "https://formsubmit.co/ajax/aust.competitive.programming@gmail.com";
    pub const DEFAULT_REPORT_RELAY: &str = "https://formsubmit.co/ajax/apuorgho7@gmail.com";
}
