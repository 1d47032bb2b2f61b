//! Static page content.
//!
//! Pure data: navigation links, platform descriptions, footer columns.
//! Nothing here changes after process start.

pub mod links;
pub mod platforms;

pub use links::{ContactInfo, EcosystemMenuItem, FooterColumn};
pub use platforms::{find_platform, PlatformEntry, PLATFORMS, PLATFORM_COUNT};

/// A named link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(name: &'static str, href: &'static str) -> Self {
        Self { name, href }
    }

    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// Reference to a platform logo: the image asset name, plus a two-letter
/// monogram drawn when the asset isn't bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoRef {
    pub asset: &'static str,
    pub monogram: &'static str,
}

impl LogoRef {
    pub const fn new(asset: &'static str, monogram: &'static str) -> Self {
        Self { asset, monogram }
    }
}

/// Page regions reachable through in-page anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Top,
    Ecosystem,
    Footer,
}

impl Section {
    /// Resolve an anchor fragment. Returns `None` for anchors with no
    /// section on this page.
    pub fn from_anchor(href: &str) -> Option<Self> {
        match href {
            "#" | "/" | "" => Some(Self::Top),
            "#ecosystem" | "#solutions" => Some(Self::Ecosystem),
            "#about" | "#contact" => Some(Self::Footer),
            _ => None,
        }
    }
}
