//! Main navigation tabs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main navigation tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Home feed
    #[default]
    Home,
    /// Talks and learning resources
    Resources,
    /// Conferences
    Conferences,
    /// Blog
    Blog,
    /// Offline downloads
    Downloads,
}

impl Tab {
    /// All tabs in order
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Resources, Tab::Conferences, Tab::Blog, Tab::Downloads];

    /// Position of this tab in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Resources => 1,
            Tab::Conferences => 2,
            Tab::Blog => 3,
            Tab::Downloads => 4,
        }
    }

    /// Tab at a tab bar position
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this tab
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Resources => "Resources",
            Tab::Conferences => "Conferences",
            Tab::Blog => "Blog",
            Tab::Downloads => "Downloads",
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "house",
            Tab::Resources => "books.vertical",
            Tab::Conferences => "person.3",
            Tab::Blog => "doc.richtext",
            Tab::Downloads => "arrow.down.circle",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
