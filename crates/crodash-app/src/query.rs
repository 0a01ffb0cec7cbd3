//! URL query parameters that carry navigation state
//!
//! Parsing is lenient: duplicated keys keep their first value and unknown
//! keys are ignored, so any query string yields a [`PageQuery`].

use url::form_urlencoded;

/// Query parameter selecting the active page
pub const PAGE_PARAM: &str = "page";

/// Query parameter forcing the mobile layout
pub const MOBILE_PARAM: &str = "mobile";

/// Query parameter carrying the debug override "Forcer le mode mobile"
pub const FORCE_MOBILE_PARAM: &str = "force_mobile";

const FORCE_MOBILE_ON: &str = "1";

/// The navigation-relevant part of a dashboard URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Raw `page` value, not yet validated against the registry
    pub page: Option<String>,
    /// Raw `mobile` value
    pub mobile: Option<String>,
    /// Raw `force_mobile` value; only `1` enables the override
    pub force_mobile: Option<String>,
}

impl PageQuery {
    pub fn new(page: Option<&str>, mobile: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            mobile: mobile.map(str::to_string),
            force_mobile: None,
        }
    }

    /// Parse a raw query string (without the leading `?`)
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PAGE_PARAM if parsed.page.is_none() => parsed.page = Some(value.into_owned()),
                MOBILE_PARAM if parsed.mobile.is_none() => {
                    parsed.mobile = Some(value.into_owned())
                }
                FORCE_MOBILE_PARAM if parsed.force_mobile.is_none() => {
                    parsed.force_mobile = Some(value.into_owned())
                }
                _ => {}
            }
        }
        parsed
    }

    /// Same query pointing at another page
    pub fn with_page(&self, page: &str) -> Self {
        Self {
            page: Some(page.to_string()),
            ..self.clone()
        }
    }

    /// Whether the debug override is on
    pub fn forces_mobile(&self) -> bool {
        self.force_mobile.as_deref() == Some(FORCE_MOBILE_ON)
    }

    /// Same query with the debug override switched on or dropped
    pub fn with_force_mobile(&self, enabled: bool) -> Self {
        Self {
            force_mobile: enabled.then(|| FORCE_MOBILE_ON.to_string()),
            ..self.clone()
        }
    }

    /// Every parameter as `(key, value)` pairs, in serialization order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (PAGE_PARAM, &self.page),
            (MOBILE_PARAM, &self.mobile),
            (FORCE_MOBILE_PARAM, &self.force_mobile),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// Encoded query string, `page` first
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    /// Root-relative URL of the dashboard for this query
    pub fn href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", query)
        }
    }
}
