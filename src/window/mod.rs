pub mod decorator;
pub mod layout_store;

mod window_manager;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::Size;

pub use layout_store::{LayoutStore, WindowLayout};
pub use window_manager::{LaunchOutcome, TaskbarEntry, WindowDraw, WindowManager};

/// Opaque id assigned when a window opens; stable for the window's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of content a window can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    FileExplorer,
    AboutMe,
    MyProjects,
    Resume,
    Contact,
    Terminal,
    Browser,
    Settings,
    Notepad,
    Calculator,
}

impl ContentType {
    pub const ALL: [ContentType; 10] = [
        ContentType::FileExplorer,
        ContentType::AboutMe,
        ContentType::MyProjects,
        ContentType::Resume,
        ContentType::Contact,
        ContentType::Terminal,
        ContentType::Browser,
        ContentType::Settings,
        ContentType::Notepad,
        ContentType::Calculator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::FileExplorer => "file-explorer",
            ContentType::AboutMe => "about-me",
            ContentType::MyProjects => "my-projects",
            ContentType::Resume => "resume",
            ContentType::Contact => "contact",
            ContentType::Terminal => "terminal",
            ContentType::Browser => "browser",
            ContentType::Settings => "settings",
            ContentType::Notepad => "notepad",
            ContentType::Calculator => "calculator",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentType(pub String);

impl fmt::Display for UnknownContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content type `{}`", self.0)
    }
}

impl std::error::Error for UnknownContentType {}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// Everything needed to open a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub content_type: ContentType,
    pub title: String,
    /// Passed through to the content; never read by the manager.
    pub props: BTreeMap<String, String>,
    /// Geometry used when nothing has been persisted for this window.
    pub initial: Option<WindowLayout>,
    pub minimizable: bool,
    pub maximizable: bool,
}

impl WindowSpec {
    pub fn new(content_type: ContentType, title: impl Into<String>) -> Self {
        Self {
            content_type,
            title: title.into(),
            props: BTreeMap::new(),
            initial: None,
            minimizable: true,
            maximizable: true,
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_initial(mut self, layout: WindowLayout) -> Self {
        self.initial = Some(layout);
        self
    }

    pub fn fixed_size(mut self) -> Self {
        self.maximizable = false;
        self
    }

    pub fn no_minimize(mut self) -> Self {
        self.minimizable = false;
        self
    }
}

/// One open window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInstance {
    pub id: WindowId,
    pub content_type: ContentType,
    pub title: String,
    pub props: BTreeMap<String, String>,
    pub minimized: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    /// Size used when a maximized window is dragged out and its retained
    /// size would fill the screen.
    pub fallback_size: Size,
    pub layout: WindowLayout,
}

impl WindowInstance {
    pub fn persistence_key(&self) -> String {
        persistence_key(self.content_type, self.id)
    }
}

/// Storage key for a window's layout. Two windows of the same content type
/// get independent keys.
pub fn persistence_key(content_type: ContentType, id: WindowId) -> String {
    format!("window-layout:{content_type}:{id}")
}

/// Rendering layer: the focused window sits above every other window, which
/// all share one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ZBand {
    Unfocused,
    Focused,
}

impl ZBand {
    pub fn z_index(self) -> u8 {
        match self {
            ZBand::Unfocused => 49,
            ZBand::Focused => 50,
        }
    }
}
