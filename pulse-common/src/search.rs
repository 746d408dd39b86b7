//! Search criteria <-> URL
//!
//! The URL is the source of truth: the search page decodes it on every
//! navigation and pushes a new location whenever the criteria change.

use tracing::warn;

/// Result tab selected by the `/search/:tab` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTab {
    People,
    Projects,
}

impl SearchTab {
    pub const ALL: [SearchTab; 2] = [SearchTab::Projects, SearchTab::People];

    pub fn name(&self) -> &'static str {
        match self {
            SearchTab::People => "people",
            SearchTab::Projects => "projects",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "people" => Some(SearchTab::People),
            "projects" => Some(SearchTab::Projects),
            _ => None,
        }
    }

    /// Tab named by the last segment of `pathname`, if any.
    pub fn from_path(pathname: &str) -> Option<Self> {
        pathname
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(Self::from_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub keyword: String,
    pub help_type: String,
    pub tab: Option<SearchTab>,
}

impl SearchCriteria {
    /// Search by keyword. Clears the help-type filter.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.help_type.clear();
    }

    /// Filter by help type. Clears the keyword.
    pub fn set_help_type(&mut self, help_type: impl Into<String>) {
        self.help_type = help_type.into();
        self.keyword.clear();
    }

    /// Dismiss the keyword, leaving any filter in place.
    pub fn clear_keyword(&mut self) {
        self.keyword.clear();
    }

    /// Help-type results are always projects.
    pub fn effective_tab(&self) -> Option<SearchTab> {
        if self.help_type.is_empty() {
            self.tab
        } else {
            Some(SearchTab::Projects)
        }
    }
}

/// Where to navigate for a set of criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLocation {
    pub pathname: String,
    /// Form-urlencoded, without the leading `?`
    pub query: String,
}

impl SearchLocation {
    pub fn to_url(&self) -> String {
        format!("{}?{}", self.pathname, self.query)
    }
}

/// Read criteria from a query string. `tab` comes from the route, not the query.
///
/// A repeated key keeps its first value.
pub fn decode(query: &str, tab: Option<SearchTab>) -> SearchCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("Ignoring malformed search query {query:?}: {e}");
            Vec::new()
        }
    };

    let first = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    };

    SearchCriteria {
        keyword: first("keyword"),
        help_type: first("helpType"),
        tab,
    }
}

/// Build the location for `criteria`, starting from `current_path`.
pub fn encode(criteria: &SearchCriteria, current_path: &str) -> SearchLocation {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    let mut pathname = current_path.to_string();

    if !criteria.keyword.is_empty() {
        pairs.push(("keyword", &criteria.keyword));
    }

    if !criteria.help_type.is_empty() {
        pairs.push(("helpType", &criteria.help_type));

        // Filter results live on the generic search page
        if current_path.ends_with("people") || current_path.ends_with("projects") {
            pathname = "/search".to_string();
        }
    }

    let query = serde_urlencoded::to_string(&pairs).unwrap_or_default();
    SearchLocation { pathname, query }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_both_params() {
        let c = decode("keyword=foo&helpType=design", None);
        assert_eq!(c.keyword, "foo");
        assert_eq!(c.help_type, "design");
    }

    #[test]
    fn test_set_help_type_clears_keyword() {
        let mut c = decode("keyword=foo&helpType=design", None);
        c.set_help_type("design");
        assert_eq!(c.keyword, "");
        assert_eq!(c.help_type, "design");
    }

    #[test]
    fn test_set_keyword_clears_help_type() {
        let mut c = decode("?helpType=code", Some(SearchTab::People));
        c.set_keyword("privacy");
        assert_eq!(c.help_type, "");
        assert_eq!(c.keyword, "privacy");
        assert_eq!(c.tab, Some(SearchTab::People));
    }

    #[test]
    fn test_decode_ignores_unknown_and_empty() {
        let c = decode("", Some(SearchTab::Projects));
        assert_eq!(c, SearchCriteria {
            tab: Some(SearchTab::Projects),
            ..SearchCriteria::default()
        });

        let c = decode("utm_source=x&keyword=a%20b", None);
        assert_eq!(c.keyword, "a b");
    }

    #[test]
    fn test_decode_repeated_key_keeps_first() {
        let c = decode("keyword=a&keyword=b&helpType=design", None);
        assert_eq!(c.keyword, "a");
        assert_eq!(c.help_type, "design");
    }

    #[test]
    fn test_encode_escapes_and_orders() {
        let c = SearchCriteria {
            keyword: "open source & you".into(),
            ..SearchCriteria::default()
        };
        let loc = encode(&c, "/search/projects");
        assert_eq!(loc.pathname, "/search/projects");
        assert_eq!(loc.query, "keyword=open+source+%26+you");
    }

    #[test]
    fn test_encode_help_type_resets_dropdown_path() {
        let mut c = SearchCriteria::default();
        c.set_help_type("design");
        assert_eq!(encode(&c, "/search/people").pathname, "/search");
        assert_eq!(encode(&c, "/search/projects").pathname, "/search");
        assert_eq!(encode(&c, "/search").pathname, "/search");
        assert_eq!(encode(&c, "/search").to_url(), "/search?helpType=design");
    }

    #[test]
    fn test_encode_empty_criteria() {
        let loc = encode(&SearchCriteria::default(), "/search");
        assert_eq!(loc.query, "");
        assert_eq!(loc.to_url(), "/search?");
    }

    #[test]
    fn test_round_trip_single_criterion() {
        let cases = vec![
            (
                SearchCriteria {
                    keyword: "mozilla festival".into(),
                    tab: Some(SearchTab::People),
                    ..SearchCriteria::default()
                },
                "/search/people",
            ),
            (
                SearchCriteria {
                    help_type: "writing".into(),
                    ..SearchCriteria::default()
                },
                "/search/projects",
            ),
            (SearchCriteria::default(), "/search"),
        ];

        for (criteria, path) in cases {
            let loc = encode(&criteria, path);
            let decoded = decode(&loc.query, SearchTab::from_path(&loc.pathname));
            assert_eq!(decoded, criteria, "path {path}");
        }
    }

    #[test]
    fn test_effective_tab_forces_projects_for_filter() {
        let mut c = SearchCriteria {
            tab: Some(SearchTab::People),
            ..SearchCriteria::default()
        };
        assert_eq!(c.effective_tab(), Some(SearchTab::People));
        c.set_help_type("code");
        assert_eq!(c.effective_tab(), Some(SearchTab::Projects));
    }

    #[test]
    fn test_tab_from_path() {
        assert_eq!(SearchTab::from_path("/search/people"), Some(SearchTab::People));
        assert_eq!(SearchTab::from_path("/search/projects/"), Some(SearchTab::Projects));
        assert_eq!(SearchTab::from_path("/search"), None);
    }
}
