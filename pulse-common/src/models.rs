//! Wire types returned by the Pulse API

use crate::tabs::{EntryCounts, EntryType, ProfileTab};
use serde::{Deserialize, Serialize};

pub type EntryId = u64;

/// Creator credited on an entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    #[serde(default)]
    pub profile_id: Option<u64>,
}

/// A project entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// "Why is this interesting?"
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub get_involved: Option<String>,
    #[serde(default)]
    pub get_involved_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// ISO 8601 creation timestamp
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub published_by: Option<String>,
    #[serde(default)]
    pub submitter_profile_id: Option<u64>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub help_types: Vec<String>,
    #[serde(default)]
    pub related_creators: Vec<Creator>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl Entry {
    /// Creation date formatted like "Mar 04, 2018".
    pub fn created_label(&self) -> Option<String> {
        let created = self.created.as_deref()?;
        let date = created.get(..10)?;
        let mut parts = date.split('-');
        let year = parts.next()?;
        let month: usize = parts.next()?.parse().ok()?;
        let day = parts.next()?;
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let month = MONTHS.get(month.checked_sub(1)?)?;
        Some(format!("{month} {day}, {year}"))
    }

    /// Tweet intent link sharing this entry as shown at `page_url`.
    pub fn twitter_share_url(&self, page_url: &str) -> String {
        let pairs = [("text", self.title.as_str()), ("url", page_url)];
        let query = serde_urlencoded::to_string(&pairs[..]).unwrap_or_default();
        format!("https://twitter.com/intent/tweet?{query}")
    }
}

/// One page of entries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Entry>,
}

/// A way people can help a project, as offered by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpType {
    pub value: String,
    pub label: String,
}

/// An internet health issue entries can be filed under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response of the user status endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatus {
    #[serde(alias = "loggedin", default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub moderator: bool,
}

/// Profile header data used by the profile page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub profile_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub my_profile: bool,
    #[serde(default)]
    pub entry_counts: EntryCounts,
}

/// Entries linked to a profile, grouped by how they are linked
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileEntries {
    pub published: Vec<Entry>,
    pub created: Vec<Entry>,
    pub favorited: Vec<Entry>,
}

impl ProfileEntries {
    pub fn of_type(&self, entry_type: EntryType) -> &[Entry] {
        match entry_type {
            EntryType::Published => &self.published,
            EntryType::Created => &self.created,
            EntryType::Favorited => &self.favorited,
        }
    }

    /// Entries listed under `tab`, in entry-type order, each entry once.
    pub fn for_tab(&self, tab: ProfileTab) -> Vec<Entry> {
        let mut entries: Vec<Entry> = Vec::new();
        for entry_type in tab.entry_types() {
            for entry in self.of_type(*entry_type) {
                if !entries.iter().any(|e| e.id == entry.id) {
                    entries.push(entry.clone());
                }
            }
        }
        entries
    }
}

/// Filter for listing entries
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryQuery {
    pub featured: bool,
    pub tag: Option<String>,
    pub issue: Option<String>,
    pub search: Option<String>,
    pub help_type: Option<String>,
    /// Restrict to these ids (anonymous bookmarks)
    pub ids: Option<Vec<EntryId>>,
    /// Only the logged-in user's server-side bookmarks
    pub bookmarked_only: bool,
    pub page: u32,
    pub page_size: u32,
}

impl EntryQuery {
    pub fn featured() -> Self {
        Self {
            featured: true,
            ..Self::default()
        }
    }

    /// Query-string pairs in the API's vocabulary. Unset filters are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.featured {
            pairs.push(("featured", "True".to_string()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(issue) = &self.issue {
            pairs.push(("issue", issue.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(help_type) = &self.help_type {
            pairs.push(("help_type", help_type.clone()));
        }
        if let Some(ids) = &self.ids {
            let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            pairs.push(("ids", joined.join(",")));
        }
        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size > 0 {
            pairs.push(("page_size", self.page_size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: EntryId) -> Entry {
        Entry {
            id,
            title: format!("entry {id}"),
            ..Entry::default()
        }
    }

    #[test]
    fn test_twitter_share_url_encodes_title_and_page() {
        let entry = Entry {
            title: "Privacy & you".to_string(),
            ..entry(3)
        };
        assert_eq!(
            entry.twitter_share_url("https://pulse.test/entry/3"),
            "https://twitter.com/intent/tweet?text=Privacy+%26+you&url=https%3A%2F%2Fpulse.test%2Fentry%2F3"
        );
    }

    #[test]
    fn test_projects_tab_merges_published_and_created() {
        let entries = ProfileEntries {
            published: vec![entry(1), entry(2)],
            created: vec![entry(2), entry(3)],
            favorited: vec![entry(9)],
        };
        let ids: Vec<EntryId> = entries
            .for_tab(ProfileTab::Projects)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(entries.for_tab(ProfileTab::Favs).len(), 1);
    }

    #[test]
    fn test_profile_entries_missing_groups_default_empty() {
        let entries: ProfileEntries =
            serde_json::from_str(r#"{"favorited": [{"id": 4, "title": "Firefox"}]}"#).unwrap();
        assert!(entries.published.is_empty());
        assert_eq!(entries.favorited[0].title, "Firefox");
    }

    #[test]
    fn test_entry_parses_sparse_json() {
        let entry: Entry = serde_json::from_str(r#"{"id": 12, "title": "Lightbeam"}"#).unwrap();
        assert_eq!(entry.id, 12);
        assert!(!entry.is_bookmarked);
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_user_status_accepts_loggedin_alias() {
        let status: UserStatus =
            serde_json::from_str(r#"{"loggedin": true, "username": "ada"}"#).unwrap();
        assert!(status.logged_in);
        assert_eq!(status.username.as_deref(), Some("ada"));
    }

    #[test]
    fn test_created_label() {
        let entry = Entry {
            created: Some("2018-03-04T10:11:12Z".into()),
            ..Entry::default()
        };
        assert_eq!(entry.created_label().as_deref(), Some("Mar 04, 2018"));
    }

    #[test]
    fn test_created_label_rejects_bad_month() {
        let entry = Entry {
            created: Some("2018-13-04".into()),
            ..Entry::default()
        };
        assert_eq!(entry.created_label(), None);
    }

    #[test]
    fn test_entry_query_pairs() {
        let query = EntryQuery {
            ids: Some(vec![3, 1]),
            page: 2,
            ..EntryQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![("ids", "3,1".to_string()), ("page", "2".to_string())]
        );
        assert_eq!(
            EntryQuery::featured().to_pairs(),
            vec![("featured", "True".to_string())]
        );
    }
}
