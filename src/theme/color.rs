//! CSS hex color parsing.
//!
//! Hex digits go through a table-free arithmetic select so malformed input
//! degrades to a color instead of an error path.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `opacity` (0..=1).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Component-wise linear blend, `t` = 0 gives `self`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let m = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: m(self.r, other.r),
            g: m(self.g, other.g),
            b: m(self.b, other.b),
            a: m(self.a, other.a),
        }
    }
}

/// Hex character → 4-bit value. Exactly one of the three ranges matches
/// a valid digit; anything else yields 0.
#[inline(always)]
fn hex_digit(b: u8) -> u8 {
    let is_digit = (b.wrapping_sub(b'0') < 10) as u8;
    let is_lower = (b.wrapping_sub(b'a') < 6) as u8;
    let is_upper = (b.wrapping_sub(b'A') < 6) as u8;

    is_digit
        .wrapping_mul(b.wrapping_sub(b'0'))
        .wrapping_add(is_lower.wrapping_mul(b.wrapping_sub(b'a').wrapping_add(10)))
        .wrapping_add(is_upper.wrapping_mul(b.wrapping_sub(b'A').wrapping_add(10)))
}

#[inline(always)]
fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_digit(hi) << 4) | hex_digit(lo)
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
///
/// Returns `Rgba::BLACK` on anything else.
pub fn parse_hex_color(s: &str) -> Rgba {
    let bytes = s.trim().as_bytes();
    if bytes.first() != Some(&b'#') {
        return Rgba::BLACK;
    }

    match bytes.len() {
        4 => {
            let r = hex_digit(bytes[1]);
            let g = hex_digit(bytes[2]);
            let b = hex_digit(bytes[3]);
            Rgba::rgb(r << 4 | r, g << 4 | g, b << 4 | b)
        }
        7 => Rgba::rgb(
            hex_byte(bytes[1], bytes[2]),
            hex_byte(bytes[3], bytes[4]),
            hex_byte(bytes[5], bytes[6]),
        ),
        9 => Rgba {
            r: hex_byte(bytes[1], bytes[2]),
            g: hex_byte(bytes[3], bytes[4]),
            b: hex_byte(bytes[5], bytes[6]),
            a: hex_byte(bytes[7], bytes[8]),
        },
        _ => Rgba::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit() {
        assert_eq!(hex_digit(b'0'), 0);
        assert_eq!(hex_digit(b'9'), 9);
        assert_eq!(hex_digit(b'a'), 10);
        assert_eq!(hex_digit(b'F'), 15);
        assert_eq!(hex_digit(b'z'), 0);
    }

    #[test]
    fn test_parse_hex_long() {
        assert_eq!(parse_hex_color("#22d3ee"), Rgba::rgb(0x22, 0xd3, 0xee));
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(parse_hex_color("#F80"), Rgba::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let c = parse_hex_color("#8b5cf680");
        assert_eq!(c.a, 0x80);
    }

    #[test]
    fn test_parse_invalid_is_black() {
        assert_eq!(parse_hex_color("violet"), Rgba::BLACK);
        assert_eq!(parse_hex_color("#12345"), Rgba::BLACK);
    }

    #[test]
    fn test_lerp_and_opacity() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert!((127..=128).contains(&mid.r), "mid.r = {}", mid.r);
        assert_eq!(Rgba::WHITE.with_opacity(0.0).a, 0);
        assert_eq!(Rgba::WHITE.with_opacity(2.0).a, 255);
    }
}
