//! Page header widget

use crodash_app::PageEntry;

use super::Widget;
use crate::html::escape;

/// Title and subtitle above the page body
pub struct PageHeader<'a> {
    entry: &'a PageEntry,
}

impl<'a> PageHeader<'a> {
    pub fn new(entry: &'a PageEntry) -> Self {
        Self { entry }
    }
}

impl Widget for PageHeader<'_> {
    fn render_into(&self, out: &mut String) {
        out.push_str(r#"<header class="page-header"><h1 class="page-title">"#);
        if !self.entry.icon.is_empty() {
            out.push_str(&escape(&self.entry.icon));
            out.push(' ');
        }
        out.push_str(&escape(&self.entry.label));
        out.push_str("</h1>");
        if !self.entry.subtitle.is_empty() {
            out.push_str(r#"<p class="page-subtitle">"#);
            out.push_str(&escape(&self.entry.subtitle));
            out.push_str("</p>");
        }
        out.push_str("</header>");
    }
}
