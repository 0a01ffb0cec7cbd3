//! Placeholder shown when a page body fails to render

use super::Widget;
use crate::html::escape;

pub struct MaintenanceBox<'a> {
    page_label: &'a str,
    detail: &'a str,
}

impl<'a> MaintenanceBox<'a> {
    pub fn new(page_label: &'a str, detail: &'a str) -> Self {
        Self { page_label, detail }
    }
}

impl Widget for MaintenanceBox<'_> {
    fn render_into(&self, out: &mut String) {
        out.push_str(r#"<section class="content-section maintenance"><p class="status-red">"#);
        out.push_str("Erreur lors du chargement de la page ");
        out.push_str(&escape(self.page_label));
        out.push_str(" : ");
        out.push_str(&escape(self.detail));
        out.push_str("</p><h3>🔧 Page en maintenance</h3>");
        out.push_str("<p>Cette page est temporairement indisponible.</p></section>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_markup() {
        insta::assert_snapshot!(
            MaintenanceBox::new("Framework CRO", "pillars: <bad>").render(),
            @r#"<section class="content-section maintenance"><p class="status-red">Erreur lors du chargement de la page Framework CRO : pillars: &lt;bad&gt;</p><h3>🔧 Page en maintenance</h3><p>Cette page est temporairement indisponible.</p></section>"#
        );
    }
}
