use web_time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const RATINGS_PAGE_SIZES: [usize; 4] = [15, 20, 50, 100];
pub const CONTEST_PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Above this many pages the ratings pager collapses into a gapped window
pub const GAPPED_WINDOW_THRESHOLD: usize = 9;
pub const GAPPED_WINDOW_RADIUS: usize = 2;
pub const SLIDING_WINDOW_WIDTH: usize = 5;

/// Vertical offset the window scrolls back to after a page change
pub const PAGE_CHANGE_SCROLL_TOP: f64 = 140.0;

pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_secs(4);

pub const ATCODER_ID_WIDTH: usize = 3;

/// Contest start times are shown in Bangladesh time
pub const BD_UTC_OFFSET_SECS: i32 = 6 * 60 * 60;
