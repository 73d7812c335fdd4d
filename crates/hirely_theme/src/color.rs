//! Color value type used by all design tokens

/// An RGBA color with components in the `0.0..=1.0` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Create an opaque color from float components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from float components including alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` integer.
    pub fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
        )
    }

    /// Return the same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Serialize for CSS: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        if self.a < 1.0 {
            format!("rgba({r},{g},{b},{})", self.a)
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_round_trips_through_css() {
        assert_eq!(Color::from_hex(0x1E66F5).to_css(), "#1e66f5");
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
    }

    #[test]
    fn translucent_colors_serialize_as_rgba() {
        let c = Color::from_hex(0xD20F39).with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(210,15,57,0.5)");
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::from_hex(0x000000);
        let b = Color::from_hex(0xFFFFFF);
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
    }
}
