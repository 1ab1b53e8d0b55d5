//! Deep-link and share-URL generation
//!
//! The inverse of [`DeepLinkRouter`](crate::router::DeepLinkRouter): builds the
//! canonical link for a destination with the same path vocabulary, so routing a
//! generated link reaches an equivalent destination.

use crate::config::NavigationConfig;
use crate::destination::Destination;

/// Builds app-scheme and public share links
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    scheme: String,
    public_domain: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl LinkBuilder {
    /// Create a link builder for the configured scheme and domain
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            scheme: config.scheme.to_ascii_lowercase(),
            public_domain: config.public_domain.to_ascii_lowercase(),
        }
    }

    /// Path for a destination, without a leading slash
    ///
    /// Deep links and share payloads have no path of their own.
    pub fn path_for(&self, destination: &Destination) -> Option<String> {
        match destination {
            Destination::TalkDetail(_)
            | Destination::ConferenceDetail(_)
            | Destination::BlogDetail(_)
            | Destination::ResourceDetail(_) => {
                let kind = destination.content_kind()?;
                let id = destination.content_id()?;
                Some(format!("{}/{}", kind.path_token(), urlencoding::encode(id)))
            }
            Destination::NowPlaying => Some("now-playing".to_string()),
            Destination::Settings => Some("settings".to_string()),
            Destination::PrivacySettings => Some("privacy-settings".to_string()),
            Destination::AboutApp => Some("about".to_string()),
            Destination::Downloads => Some("downloads".to_string()),
            Destination::DeepLink(_) | Destination::Share(_) => None,
        }
    }

    /// App-scheme deep link for a destination (`podium://talk/123`)
    pub fn deep_link(&self, destination: &Destination) -> Option<String> {
        self.path_for(destination)
            .map(|path| format!("{}://{}", self.scheme, path))
    }

    /// Public web URL for a destination (`https://podium.app/talk/123`)
    pub fn share_url(&self, destination: &Destination) -> Option<String> {
        self.deep_link(destination)
            .and_then(|link| self.public_url(&link))
    }

    /// Rewrite an app-scheme link into a public web URL, keeping the path
    ///
    /// Returns `None` for links on any other scheme.
    pub fn public_url(&self, app_link: &str) -> Option<String> {
        let (scheme, path) = app_link.split_once("://")?;
        if !scheme.eq_ignore_ascii_case(&self.scheme) {
            return None;
        }
        Some(format!("https://{}/{}", self.public_domain, path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::{ContentKind, EntityRef};
    use crate::router::{DeepLinkRouter, RouteAction};

    fn all_routable() -> Vec<Destination> {
        let mut destinations: Vec<Destination> = ContentKind::ALL
            .iter()
            .map(|kind| Destination::content(*kind, "id with/slash & space"))
            .collect();
        destinations.extend([
            Destination::NowPlaying,
            Destination::Settings,
            Destination::PrivacySettings,
            Destination::AboutApp,
        ]);
        destinations
    }

    /// The destination a list of route actions leads to, identifier only
    fn reached(actions: &[RouteAction]) -> Option<Destination> {
        actions.iter().rev().find_map(|action| match action {
            RouteAction::Navigate(d) | RouteAction::Present(d) => Some(d.clone()),
            RouteAction::RequestContent(request) => {
                Some(Destination::content(request.kind, request.id.clone()))
            }
            RouteAction::SelectTab(_) => None,
        })
    }

    #[test]
    fn test_deep_links() {
        let links = LinkBuilder::default();
        assert_eq!(
            links.deep_link(&Destination::content(ContentKind::Talk, "123")),
            Some("podium://talk/123".to_string())
        );
        assert_eq!(
            links.deep_link(&Destination::ConferenceDetail("abc".into())),
            Some("podium://conference/abc".to_string())
        );
        assert_eq!(links.deep_link(&Destination::NowPlaying), Some("podium://now-playing".to_string()));
        assert_eq!(links.deep_link(&Destination::Downloads), Some("podium://downloads".to_string()));
        assert_eq!(links.deep_link(&Destination::Share("s".into())), None);
        assert_eq!(links.deep_link(&Destination::DeepLink("podium://settings".into())), None);
    }

    #[test]
    fn test_identifiers_are_encoded() {
        let links = LinkBuilder::default();
        assert_eq!(
            links.deep_link(&Destination::BlogDetail(EntityRef::new("a b/c"))),
            Some("podium://blog/a%20b%2Fc".to_string())
        );
    }

    #[test]
    fn test_generated_links_route_back() {
        let links = LinkBuilder::default();
        let router = DeepLinkRouter::default();

        for destination in all_routable() {
            let link = links.deep_link(&destination).unwrap();
            let actions = router.resolve(&link).unwrap();
            assert_eq!(reached(&actions), Some(destination.clone()), "{link}");
        }
    }

    #[test]
    fn test_downloads_link_routes_to_tab() {
        let links = LinkBuilder::default();
        let link = links.deep_link(&Destination::Downloads).unwrap();
        assert_eq!(
            DeepLinkRouter::default().resolve(&link).unwrap(),
            vec![RouteAction::SelectTab(crate::tab::Tab::Downloads)]
        );
    }

    #[test]
    fn test_share_urls() {
        let links = LinkBuilder::new(&NavigationConfig::default().public_domain("share.podium.app"));
        assert_eq!(
            links.share_url(&Destination::content(ContentKind::Resource, "r1")),
            Some("https://share.podium.app/resource/r1".to_string())
        );
        assert_eq!(
            links.public_url("podium://conference/abc"),
            Some("https://share.podium.app/conference/abc".to_string())
        );
        assert_eq!(links.public_url("other://conference/abc"), None);
        assert_eq!(links.public_url("not a link"), None);
    }

    #[test]
    fn test_share_urls_route_back_as_universal_links() {
        let config = NavigationConfig::default().universal_links(true);
        let links = LinkBuilder::new(&config);
        let router = DeepLinkRouter::new(&config);

        for destination in all_routable() {
            let url = links.share_url(&destination).unwrap();
            assert_eq!(reached(&router.resolve(&url).unwrap()), Some(destination), "{url}");
        }
    }
}
