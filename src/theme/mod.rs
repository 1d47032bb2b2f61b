//! Page palette and gradients.

pub mod color;

pub use color::{parse_hex_color, Rgba};

/// Two-stop gradient, kept as hex source so the registries stay `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn stops(&self) -> (Rgba, Rgba) {
        (parse_hex_color(self.from), parse_hex_color(self.to))
    }

    /// Color at `t` along the gradient.
    pub fn at(&self, t: f32) -> Rgba {
        let (a, b) = self.stops();
        a.lerp(b, t)
    }
}

/// Dark "futuristic" palette shared by every section.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgba,
    pub card: Rgba,
    pub muted: Rgba,
    pub border: Rgba,
    pub foreground: Rgba,
    pub muted_foreground: Rgba,
    pub primary: Rgba,
    pub accent: Rgba,
    pub success: Rgba,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            background: Rgba::rgb(8, 11, 22),
            card: Rgba::rgb(15, 20, 36),
            muted: Rgba::rgb(27, 33, 52),
            border: Rgba::rgb(40, 48, 72),
            foreground: Rgba::rgb(236, 240, 250),
            muted_foreground: Rgba::rgb(140, 150, 176),
            primary: Rgba::rgb(0x22, 0xd3, 0xee),
            accent: Rgba::rgb(0x8b, 0x5c, 0xf6),
            success: Rgba::rgb(0x10, 0xb9, 0x81),
        }
    }

    /// Primary→accent gradient used for headline text and the hub glow.
    pub fn brand_gradient(&self) -> (Rgba, Rgba) {
        (self.primary, self.accent)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
