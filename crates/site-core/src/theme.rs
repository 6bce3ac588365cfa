//! Color tokens consumed by the views and by the hero renderer. A change to
//! the primary token re-initializes the background view.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Primary brand color, linear-ish rgb in [0, 1]. Colors the hero points.
    pub primary: [f32; 3],
    pub primary_hex: u32,
}

impl Default for Theme {
    fn default() -> Self {
        // #2563eb, the brand blue
        Theme::from_hex(0x2563eb)
    }
}

impl Theme {
    pub fn from_hex(rgb: u32) -> Self {
        Self {
            primary: hex_to_rgb(rgb),
            primary_hex: rgb & 0x00ff_ffff,
        }
    }

    pub fn css_primary(&self) -> String {
        format!("#{:06x}", self.primary_hex)
    }
}

/// Parse a `#rrggbb` (or bare `rrggbb`) token. Rejects anything else.
pub fn parse_hex_color(token: &str) -> Option<u32> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[inline]
fn hex_to_rgb(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}
