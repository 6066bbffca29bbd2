// Page stats: timing, rendering and splicing of the per-request summary.
// Modules are private, only exported symbols are public

mod fragment;
mod inject;
mod middleware;
mod page_stats;

pub use fragment::{group_thousands, render_fragment, FragmentStyle, DEFAULT_STYLESHEET};
pub use inject::{charset_from_content_type, inject_fragment, InjectError};
pub use middleware::{page_stats_middleware, PageStatsState};
pub use page_stats::PageStats;
