//! Where the visitor is: path + optional anchor fragment, and which page that maps to.

/// The two pages the site knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    /// Classify a pathname. Only the site root (under `base`) is the home page.
    pub fn resolve(path: &str, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let rest = match path.strip_prefix(base) {
            Some(rest) => rest,
            None => return Route::NotFound,
        };
        match rest {
            "" | "/" => Route::Home,
            _ => Route::NotFound,
        }
    }

    /// HTTP-equivalent status for the rendered page.
    pub fn status_code(self) -> u16 {
        match self {
            Route::Home => 200,
            Route::NotFound => 404,
        }
    }

    pub fn title(self, business_name: &str) -> String {
        match self {
            Route::Home => business_name.to_string(),
            Route::NotFound => format!("Page Not Found | {business_name}"),
        }
    }
}

/// Current path and anchor, derived from the browser location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    path: String,
    fragment: Option<String>,
}

impl NavigationState {
    /// Build from router location parts. `hash` may or may not carry its leading `#`.
    pub fn new(path: impl Into<String>, hash: &str) -> Self {
        let mut path = path.into();
        if path.is_empty() {
            path.push('/');
        }
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        Self {
            path,
            fragment: (!fragment.is_empty()).then(|| fragment.to_string()),
        }
    }

    /// Split an href like `/#contact` or `/about?x=1#team`. The query is dropped.
    pub fn parse(href: &str) -> Self {
        let (rest, hash) = match href.split_once('#') {
            Some((rest, frag)) => (rest, frag),
            None => (href, ""),
        };
        let path = rest.split_once('?').map_or(rest, |(p, _)| p);
        Self::new(path, hash)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn route(&self, base: &str) -> Route {
        Route::resolve(&self.path, base)
    }

    /// A nav link is highlighted when it points at exactly this path and anchor.
    pub fn is_active(&self, link_href: &str) -> bool {
        let link = Self::parse(link_href);
        link.path == self.path && link.fragment == self.fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_root_is_home() {
        assert_eq!(Route::resolve("/", "/"), Route::Home);
        assert_eq!(Route::resolve("", "/"), Route::Home);
        for path in [
            "/about",
            "/contact",
            "/index.html",
            "//",
            "/capabilities/",
            "/%20",
            "/home",
            "/404",
        ] {
            assert_eq!(Route::resolve(path, "/"), Route::NotFound, "path {path}");
        }
    }

    #[test]
    fn resolves_under_base_path() {
        assert_eq!(Route::resolve("/shop", "/shop/"), Route::Home);
        assert_eq!(Route::resolve("/shop/", "/shop"), Route::Home);
        assert_eq!(Route::resolve("/shop/gallery", "/shop"), Route::NotFound);
        assert_eq!(Route::resolve("/", "/shop"), Route::NotFound);
    }

    #[test]
    fn status_and_title() {
        assert_eq!(Route::Home.status_code(), 200);
        assert_eq!(Route::NotFound.status_code(), 404);
        assert_eq!(Route::NotFound.title("NWPB"), "Page Not Found | NWPB");
        assert_eq!(Route::Home.title("NWPB"), "NWPB");
    }

    #[test]
    fn normalizes_hash() {
        let with = NavigationState::new("/", "#contact");
        let without = NavigationState::new("/", "contact");
        assert_eq!(with, without);
        assert_eq!(with.fragment(), Some("contact"));

        let bare = NavigationState::new("", "#");
        assert_eq!(bare.path(), "/");
        assert_eq!(bare.fragment(), None);
    }

    #[test]
    fn parses_hrefs() {
        let nav = NavigationState::parse("/#gallery");
        assert_eq!(nav.path(), "/");
        assert_eq!(nav.fragment(), Some("gallery"));

        let nav = NavigationState::parse("/about?ref=mail#team");
        assert_eq!(nav.path(), "/about");
        assert_eq!(nav.fragment(), Some("team"));
        assert_eq!(nav.route("/"), Route::NotFound);
    }

    #[test]
    fn active_link_matches_path_and_anchor() {
        let at_about = NavigationState::parse("/#about");
        assert!(at_about.is_active("/#about"));
        assert!(!at_about.is_active("/"));
        assert!(!at_about.is_active("/#gallery"));

        let at_root = NavigationState::parse("/");
        assert!(at_root.is_active("/"));
        assert!(!at_root.is_active("/#about"));
    }
}
