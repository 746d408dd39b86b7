//! Profile tab selection
//!
//! Own profiles show every tab. Visited profiles only show tabs that have
//! entries. An unknown or empty tab in the URL redirects to the base profile
//! route.

use serde::{Deserialize, Serialize};

/// Kinds of entries counted on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Published,
    Created,
    Favorited,
}

impl EntryType {
    /// Name used by the API for counts and profile entry lists
    pub fn name(&self) -> &'static str {
        match self {
            EntryType::Published => "published",
            EntryType::Created => "created",
            EntryType::Favorited => "favorited",
        }
    }
}

/// Entry counts per type for one profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryCounts {
    pub published: u32,
    pub created: u32,
    pub favorited: u32,
}

impl EntryCounts {
    pub fn get(&self, entry_type: EntryType) -> u32 {
        match entry_type {
            EntryType::Published => self.published,
            EntryType::Created => self.created,
            EntryType::Favorited => self.favorited,
        }
    }
}

/// Tabs on a profile page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileTab {
    Projects,
    Favs,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::Projects, ProfileTab::Favs];

    /// URL segment and label
    pub fn name(&self) -> &'static str {
        match self {
            ProfileTab::Projects => "projects",
            ProfileTab::Favs => "favs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }

    /// Entry types listed under this tab
    pub fn entry_types(&self) -> &'static [EntryType] {
        match self {
            ProfileTab::Projects => &[EntryType::Published, EntryType::Created],
            ProfileTab::Favs => &[EntryType::Favorited],
        }
    }

    fn has_entries(&self, counts: &EntryCounts) -> bool {
        self.entry_types().iter().any(|t| counts.get(*t) > 0)
    }
}

/// Tabs a profile can show and the one currently selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabDescriptor {
    pub available: Vec<ProfileTab>,
    /// Empty when nothing can be shown or the requested tab is not available
    pub active: Option<ProfileTab>,
}

/// What the profile page should do with a `TabDescriptor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabResolution {
    Render(ProfileTab),
    /// Navigate to `/profile/:id`, which shows `default_tab` if there is one
    RedirectToBase { default_tab: Option<ProfileTab> },
    /// Base route with nothing to show
    Nothing,
}

/// Derive the tab state for a profile.
///
/// `requested` is the raw URL segment, `None` on the base profile route.
pub fn select_tab(requested: Option<&str>, own_profile: bool, counts: &EntryCounts) -> TabDescriptor {
    let requested = requested.filter(|name| !name.is_empty());
    let available: Vec<ProfileTab> = ProfileTab::ALL
        .into_iter()
        .filter(|tab| own_profile || tab.has_entries(counts))
        .collect();

    let active = if available.is_empty() {
        None
    } else {
        match requested {
            None => available.first().copied(),
            Some(name) => available.iter().copied().find(|tab| tab.name() == name),
        }
    };

    TabDescriptor { available, active }
}

impl TabDescriptor {
    pub fn default_tab(&self) -> Option<ProfileTab> {
        self.available.first().copied()
    }

    pub fn resolution(&self, requested: Option<&str>) -> TabResolution {
        let requested = requested.filter(|name| !name.is_empty());
        if self.available.is_empty() {
            return match requested {
                Some(_) => TabResolution::RedirectToBase { default_tab: None },
                None => TabResolution::Nothing,
            };
        }
        match self.active {
            Some(tab) => TabResolution::Render(tab),
            None => TabResolution::RedirectToBase {
                default_tab: self.default_tab(),
            },
        }
    }
}

/// Holds the current descriptor and recomputes it only when the requested
/// tab changes, so redirects cannot loop on unrelated re-renders.
#[derive(Debug, Clone, Default)]
pub struct TabSelector {
    descriptor: TabDescriptor,
}

impl TabSelector {
    pub fn new(requested: Option<&str>, own_profile: bool, counts: &EntryCounts) -> Self {
        Self {
            descriptor: select_tab(requested, own_profile, counts),
        }
    }

    pub fn descriptor(&self) -> &TabDescriptor {
        &self.descriptor
    }

    /// Returns true if the descriptor was recomputed.
    pub fn update(&mut self, requested: Option<&str>, own_profile: bool, counts: &EntryCounts) -> bool {
        let current = self.descriptor.active.map(|tab| tab.name());
        if requested == current {
            return false;
        }
        self.descriptor = select_tab(requested, own_profile, counts);
        true
    }
}
