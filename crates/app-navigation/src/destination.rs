//! Destination model
//!
//! Every place the app can navigate to is a [`Destination`]. Destinations fall
//! into four classes that decide how the coordinator handles them:
//! - content destinations are pushed onto the current tab's stack
//! - modal destinations replace the presented modal
//! - `Downloads` redirects to the downloads tab
//! - deep links and share payloads are resolved into other destinations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::tab::Tab;

// =============================================================================
// Entity References
// =============================================================================

/// Opaque reference to an entity owned by the content services
///
/// Two references are equal when they point at the same entity, regardless of
/// any display metadata attached to them.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Entity identifier
    pub id: String,
    /// Display title, when the caller already resolved the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl EntityRef {
    /// Create a reference from an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), title: None }
    }

    /// Attach a display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for EntityRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Content Kinds
// =============================================================================

/// The kinds of content that can be shown in a detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Recorded talk
    Talk,
    /// Conference
    Conference,
    /// Blog post
    Blog,
    /// Learning resource
    Resource,
}

impl ContentKind {
    /// All content kinds
    pub const ALL: [ContentKind; 4] =
        [ContentKind::Talk, ContentKind::Conference, ContentKind::Blog, ContentKind::Resource];

    /// Path segment used in deep links
    pub fn path_token(&self) -> &'static str {
        match self {
            ContentKind::Talk => "talk",
            ContentKind::Conference => "conference",
            ContentKind::Blog => "blog",
            ContentKind::Resource => "resource",
        }
    }

    /// The tab that hosts detail screens of this kind
    pub fn host_tab(&self) -> Tab {
        match self {
            ContentKind::Talk | ContentKind::Resource => Tab::Resources,
            ContentKind::Conference => Tab::Conferences,
            ContentKind::Blog => Tab::Blog,
        }
    }

    /// Build the detail destination for an entity of this kind
    pub fn detail(&self, entity: EntityRef) -> Destination {
        match self {
            ContentKind::Talk => Destination::TalkDetail(entity),
            ContentKind::Conference => Destination::ConferenceDetail(entity.id),
            ContentKind::Blog => Destination::BlogDetail(entity),
            ContentKind::Resource => Destination::ResourceDetail(entity),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_token())
    }
}

// =============================================================================
// Destinations
// =============================================================================

/// How the coordinator treats a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationClass {
    /// Pushed onto the current tab's stack
    Content,
    /// Shown as the single presented modal
    Modal,
    /// Switches the selected tab
    TabRedirect,
    /// Resolved into other destinations, never stored in state
    Meta,
}

/// All navigable targets in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "destination", content = "payload", rename_all = "camelCase")]
pub enum Destination {
    // Content
    /// Talk detail screen
    TalkDetail(EntityRef),
    /// Conference detail screen, addressed by conference id
    ConferenceDetail(String),
    /// Blog post detail screen
    BlogDetail(EntityRef),
    /// Resource detail screen
    ResourceDetail(EntityRef),

    // Modals
    /// Full-screen player
    NowPlaying,
    /// Settings
    Settings,
    /// Privacy settings
    PrivacySettings,
    /// About the app
    AboutApp,

    // Tab redirect
    /// Downloads tab
    Downloads,

    // Meta
    /// External URL to be resolved by the deep-link router
    DeepLink(String),
    /// Inbound share payload
    Share(String),
}

impl Destination {
    /// Build a content destination from a kind and an identifier
    pub fn content(kind: ContentKind, id: impl Into<String>) -> Self {
        kind.detail(EntityRef::new(id))
    }

    /// Classify the destination
    pub fn class(&self) -> DestinationClass {
        match self {
            Destination::TalkDetail(_)
            | Destination::ConferenceDetail(_)
            | Destination::BlogDetail(_)
            | Destination::ResourceDetail(_) => DestinationClass::Content,
            Destination::NowPlaying
            | Destination::Settings
            | Destination::PrivacySettings
            | Destination::AboutApp => DestinationClass::Modal,
            Destination::Downloads => DestinationClass::TabRedirect,
            Destination::DeepLink(_) | Destination::Share(_) => DestinationClass::Meta,
        }
    }

    /// Whether this destination belongs on a push stack
    pub fn is_content(&self) -> bool {
        self.class() == DestinationClass::Content
    }

    /// Whether this destination is presented as a modal
    pub fn is_modal(&self) -> bool {
        self.class() == DestinationClass::Modal
    }

    /// Whether this destination may appear in history. Deep links never do;
    /// the destinations they resolve into are recorded instead.
    pub fn records_in_history(&self) -> bool {
        !matches!(self, Destination::DeepLink(_))
    }

    /// Content kind, for content destinations
    pub fn content_kind(&self) -> Option<ContentKind> {
        match self {
            Destination::TalkDetail(_) => Some(ContentKind::Talk),
            Destination::ConferenceDetail(_) => Some(ContentKind::Conference),
            Destination::BlogDetail(_) => Some(ContentKind::Blog),
            Destination::ResourceDetail(_) => Some(ContentKind::Resource),
            _ => None,
        }
    }

    /// Identifier of the referenced entity, for content destinations
    pub fn content_id(&self) -> Option<&str> {
        match self {
            Destination::TalkDetail(entity)
            | Destination::BlogDetail(entity)
            | Destination::ResourceDetail(entity) => Some(&entity.id),
            Destination::ConferenceDetail(id) => Some(id),
            _ => None,
        }
    }

    /// Display title for this destination
    pub fn title(&self) -> &'static str {
        match self {
            Destination::TalkDetail(_) => "Talk",
            Destination::ConferenceDetail(_) => "Conference",
            Destination::BlogDetail(_) => "Blog Post",
            Destination::ResourceDetail(_) => "Resource",
            Destination::NowPlaying => "Now Playing",
            Destination::Settings => "Settings",
            Destination::PrivacySettings => "Privacy",
            Destination::AboutApp => "About",
            Destination::Downloads => "Downloads",
            Destination::DeepLink(_) => "Link",
            Destination::Share(_) => "Shared Item",
        }
    }
}

/// Compact form used in log fields (`talk:123`, `settings`)
impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::TalkDetail(_)
            | Destination::ConferenceDetail(_)
            | Destination::BlogDetail(_)
            | Destination::ResourceDetail(_) => {
                let kind = self.content_kind().map(|k| k.path_token()).unwrap_or("content");
                write!(f, "{}:{}", kind, self.content_id().unwrap_or_default())
            }
            Destination::NowPlaying => f.write_str("now-playing"),
            Destination::Settings => f.write_str("settings"),
            Destination::PrivacySettings => f.write_str("privacy-settings"),
            Destination::AboutApp => f.write_str("about"),
            Destination::Downloads => f.write_str("downloads"),
            Destination::DeepLink(url) => write!(f, "deep-link:{}", url),
            Destination::Share(share_id) => write!(f, "share:{}", share_id),
        }
    }
}
