//! One-time mobile navigation hint

use super::Widget;

pub const MOBILE_HINT_TEXT: &str =
    "📱 Astuce : utilisez les onglets en haut pour naviguer entre les sections.";

/// Banner shown once per session in mobile layout
pub struct MobileHint;

impl Widget for MobileHint {
    fn render_into(&self, out: &mut String) {
        out.push_str(r#"<div class="notice mobile-hint">"#);
        out.push_str(MOBILE_HINT_TEXT);
        out.push_str("</div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_markup() {
        insta::assert_snapshot!(
            MobileHint.render(),
            @r#"<div class="notice mobile-hint">📱 Astuce : utilisez les onglets en haut pour naviguer entre les sections.</div>"#
        );
    }
}
