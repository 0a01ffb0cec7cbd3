//! HTML widget components

mod header;
mod hint;
mod maintenance;
mod sidebar;
mod tabs;

pub use header::PageHeader;
pub use hint::{MobileHint, MOBILE_HINT_TEXT};
pub use maintenance::MaintenanceBox;
pub use sidebar::{DebugToggle, Sidebar};
pub use tabs::TabStrip;

use crodash_app::PageQuery;
use url::form_urlencoded;

/// A fragment of the page that writes itself as HTML
pub trait Widget {
    fn render_into(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Link that routes a navigation click through `/navigate`
///
/// The current query travels along so the redirect keeps both mobile flags.
pub fn navigate_href(target: &str, current: &PageQuery) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("to", target)
        .extend_pairs(current.pairs())
        .finish();
    format!("/navigate?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_href_carries_query() {
        let current = PageQuery::new(Some("overview"), Some("1"));
        assert_eq!(
            navigate_href("risk", &current),
            "/navigate?to=risk&page=overview&mobile=1"
        );
    }

    #[test]
    fn test_navigate_href_carries_override() {
        let current = PageQuery::parse("page=risk&force_mobile=1");
        assert_eq!(
            navigate_href("stress", &current),
            "/navigate?to=stress&page=risk&force_mobile=1"
        );
    }

    #[test]
    fn test_navigate_href_without_query() {
        assert_eq!(
            navigate_href("framework", &PageQuery::default()),
            "/navigate?to=framework"
        );
    }
}
