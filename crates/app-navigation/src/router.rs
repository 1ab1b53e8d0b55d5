//! Deep-link router
//!
//! Maps an external URL (`podium://talk/123`) to the navigation actions it
//! should cause. The router holds no navigation state: it returns
//! [`RouteAction`]s and the coordinator applies them.
//!
//! Rules are selected by the first path segment:
//!
//! | Segment            | Actions                                          |
//! |--------------------|--------------------------------------------------|
//! | `talk/<id>`        | select Resources, request the talk               |
//! | `blog/<id>`        | select Blog, request the post                    |
//! | `resource/<id>`    | select Resources, request the resource           |
//! | `conference/<id>`  | select Conferences, push the conference detail   |
//! | `downloads`        | select Downloads                                 |
//! | `settings`         | present Settings                                 |
//! | `now-playing`      | present Now Playing                              |
//! | `privacy-settings` | present Privacy Settings                         |
//! | `about`            | present About                                    |
//! | (empty)            | select Home                                      |
//! | anything else      | select Home, logged as a warning                 |
//!
//! A content rule without an identifier resolves to no actions at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::NavigationConfig;
use crate::destination::{ContentKind, Destination};
use crate::tab::Tab;

/// Deep-link rejection reasons
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    /// The URL has no `scheme://` prefix
    #[error("Malformed URL: {0}")]
    Malformed(String),

    /// The URL uses a scheme the app does not handle
    #[error("Unsupported scheme {found:?}, expected {expected:?}")]
    SchemeMismatch {
        /// Scheme the app is registered for
        expected: String,
        /// Scheme found in the URL
        found: String,
    },

    /// A universal link for some other web domain
    #[error("Unsupported host: {0}")]
    HostMismatch(String),

    /// A path segment is not valid percent-encoded UTF-8
    #[error("Invalid path encoding: {0}")]
    InvalidEncoding(String),
}

/// Result type for deep-link resolution
pub type Result<T> = std::result::Result<T, DeepLinkError>;

/// Content that must be fetched before its detail screen can be shown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRequest {
    /// What kind of content
    pub kind: ContentKind,
    /// Raw identifier from the link
    pub id: String,
}

impl ContentRequest {
    /// Create a content request
    pub fn new(kind: ContentKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// A state change requested by a deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Select a tab
    SelectTab(Tab),
    /// Navigate to a destination
    Navigate(Destination),
    /// Present a modal destination
    Present(Destination),
    /// Ask the content services to look up an entity
    RequestContent(ContentRequest),
}

/// Rule selected by the first path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteRule {
    /// Needs an identifier and a fetch before anything is pushed
    Fetch(ContentKind),
    /// Needs an identifier, pushed directly
    Conference,
    Downloads,
    Settings,
    NowPlaying,
    PrivacySettings,
    About,
}

const ROUTE_TABLE: &[(&str, RouteRule)] = &[
    ("talk", RouteRule::Fetch(ContentKind::Talk)),
    ("conference", RouteRule::Conference),
    ("blog", RouteRule::Fetch(ContentKind::Blog)),
    ("resource", RouteRule::Fetch(ContentKind::Resource)),
    ("downloads", RouteRule::Downloads),
    ("settings", RouteRule::Settings),
    ("now-playing", RouteRule::NowPlaying),
    ("privacy-settings", RouteRule::PrivacySettings),
    ("about", RouteRule::About),
];

/// Router for the app's deep links
#[derive(Debug, Clone)]
pub struct DeepLinkRouter {
    scheme: String,
    public_domain: String,
    universal_links: bool,
}

impl Default for DeepLinkRouter {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl DeepLinkRouter {
    /// Create a router for the configured scheme
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            scheme: config.scheme.to_ascii_lowercase(),
            public_domain: config.public_domain.to_ascii_lowercase(),
            universal_links: config.universal_links,
        }
    }

    /// The scheme this router accepts
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Resolve a URL into the actions it should cause
    ///
    /// Returns an error only when the URL is not one of ours; every URL that
    /// is ours resolves to some (possibly empty) list of actions.
    pub fn resolve(&self, url: &str) -> Result<Vec<RouteAction>> {
        let segments = self.path_segments(url)?;
        Ok(self.route_segments(url, &segments))
    }

    /// Split an accepted URL into decoded, non-empty path segments
    pub fn path_segments(&self, url: &str) -> Result<Vec<String>> {
        let (scheme, rest) = url
            .trim()
            .split_once("://")
            .ok_or_else(|| DeepLinkError::Malformed(url.to_string()))?;

        let path = if scheme.eq_ignore_ascii_case(&self.scheme) {
            rest
        } else if self.universal_links && scheme.eq_ignore_ascii_case("https") {
            self.strip_public_domain(rest)?
        } else {
            return Err(DeepLinkError::SchemeMismatch {
                expected: self.scheme.clone(),
                found: scheme.to_string(),
            });
        };

        let path = path.split(['?', '#']).next().unwrap_or_default();

        path.split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|_| DeepLinkError::InvalidEncoding(segment.to_string()))
            })
            .collect()
    }

    fn strip_public_domain<'a>(&self, rest: &'a str) -> Result<&'a str> {
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (host, path) = rest.split_at(end);
        if host.eq_ignore_ascii_case(&self.public_domain) {
            Ok(path)
        } else {
            Err(DeepLinkError::HostMismatch(host.to_string()))
        }
    }

    fn route_segments(&self, url: &str, segments: &[String]) -> Vec<RouteAction> {
        let Some(first) = segments.first() else {
            return vec![RouteAction::SelectTab(Tab::Home)];
        };

        let rule = ROUTE_TABLE
            .iter()
            .find(|(token, _)| *token == first.as_str())
            .map(|(_, rule)| *rule);

        let Some(rule) = rule else {
            tracing::warn!(url = %url, segment = %first, "unknown deep link, falling back to home");
            return vec![RouteAction::SelectTab(Tab::Home)];
        };

        let id = segments.get(1);

        match rule {
            RouteRule::Fetch(kind) => match id {
                Some(id) => vec![
                    RouteAction::SelectTab(kind.host_tab()),
                    RouteAction::RequestContent(ContentRequest::new(kind, id.clone())),
                ],
                None => {
                    tracing::warn!(url = %url, kind = %kind, "deep link is missing an identifier");
                    Vec::new()
                }
            },
            RouteRule::Conference => match id {
                Some(id) => vec![
                    RouteAction::SelectTab(Tab::Conferences),
                    RouteAction::Navigate(Destination::ConferenceDetail(id.clone())),
                ],
                None => {
                    tracing::warn!(url = %url, kind = "conference", "deep link is missing an identifier");
                    Vec::new()
                }
            },
            RouteRule::Downloads => vec![RouteAction::SelectTab(Tab::Downloads)],
            RouteRule::Settings => vec![RouteAction::Present(Destination::Settings)],
            RouteRule::NowPlaying => vec![RouteAction::Present(Destination::NowPlaying)],
            RouteRule::PrivacySettings => vec![RouteAction::Present(Destination::PrivacySettings)],
            RouteRule::About => vec![RouteAction::Present(Destination::AboutApp)],
        }
    }
}
