//! Lookups supplied by the host application: what to render for a content
//! type, and which apps can be launched from the taskbar.

use std::collections::BTreeMap;

use crate::window::ContentType;

/// Maps a content type to a host-defined handler. The window manager only
/// resolves handlers; it never looks inside them.
#[derive(Debug)]
pub struct ContentRegistry<H> {
    handlers: BTreeMap<ContentType, H>,
}

impl<H> Default for ContentRegistry<H> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }
}

impl<H> ContentRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, content_type: ContentType, handler: H) -> &mut Self {
        self.handlers.insert(content_type, handler);
        self
    }

    pub fn with(mut self, content_type: ContentType, handler: H) -> Self {
        self.register(content_type, handler);
        self
    }

    pub fn resolve(&self, content_type: ContentType) -> Option<&H> {
        self.handlers.get(&content_type)
    }

    pub fn contains(&self, content_type: ContentType) -> bool {
        self.handlers.contains_key(&content_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub window_type: Option<ContentType>,
    pub href: Option<&'static str>,
    pub description: &'static str,
    pub pinned: bool,
}

/// Launchable apps keyed by app id. Several apps may share a window type.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    apps: Vec<AppMetadata>,
}

impl AppCatalog {
    pub fn new(apps: Vec<AppMetadata>) -> Self {
        Self { apps }
    }

    pub fn get(&self, id: &str) -> Option<&AppMetadata> {
        self.apps.iter().find(|app| app.id == id)
    }

    pub fn pinned(&self) -> impl Iterator<Item = &AppMetadata> {
        self.apps.iter().filter(|app| app.pinned)
    }
}

fn app(
    id: &'static str,
    name: &'static str,
    window_type: Option<ContentType>,
    href: Option<&'static str>,
    description: &'static str,
    pinned: bool,
) -> AppMetadata {
    AppMetadata {
        id,
        name,
        window_type,
        href,
        description,
        pinned,
    }
}

impl AppCatalog {
    /// The stock desktop apps.
    pub fn desktop_defaults() -> Self {
        Self::new(vec![
            app(
                "file-explorer",
                "File Explorer",
                Some(ContentType::FileExplorer),
                None,
                "Browse files and folders",
                true,
            ),
            app(
                "this-pc",
                "This PC",
                Some(ContentType::FileExplorer),
                None,
                "Access your computer's drives and folders",
                false,
            ),
            app(
                "about-me",
                "About Me",
                Some(ContentType::AboutMe),
                None,
                "Learn more about me",
                true,
            ),
            app(
                "my-projects",
                "My Projects",
                Some(ContentType::MyProjects),
                None,
                "View my portfolio projects",
                true,
            ),
            app(
                "resume",
                "Resume",
                Some(ContentType::Resume),
                None,
                "View my resume and experience",
                true,
            ),
            app(
                "contact",
                "Contact",
                Some(ContentType::Contact),
                None,
                "Get in touch with me",
                true,
            ),
            app(
                "chrome",
                "Google Chrome",
                None,
                Some("https://google.com"),
                "Web browser",
                false,
            ),
            app(
                "terminal",
                "Windows Terminal",
                Some(ContentType::Terminal),
                None,
                "Command line interface",
                true,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_registered_types_only() {
        let reg = ContentRegistry::new().with(ContentType::Resume, "resume-view");
        assert_eq!(reg.resolve(ContentType::Resume), Some(&"resume-view"));
        assert!(reg.resolve(ContentType::Contact).is_none());
        assert!(reg.contains(ContentType::Resume));
    }

    #[test]
    fn default_catalog_lookups() {
        let catalog = AppCatalog::desktop_defaults();
        let pc = catalog.get("this-pc").unwrap();
        assert_eq!(pc.window_type, Some(ContentType::FileExplorer));
        assert!(catalog.get("chrome").unwrap().href.is_some());
        assert!(catalog.get("nope").is_none());
        assert!(catalog.pinned().all(|app| app.pinned));
    }
}
