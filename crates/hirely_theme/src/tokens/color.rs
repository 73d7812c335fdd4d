//! Color tokens for theming

use crate::color::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,
    Secondary,
    SecondaryHover,
    Accent,

    // Surface colors
    Background,
    Surface,
    SurfaceRaised,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextInverse,
    TextLink,

    // Border colors
    Border,
    BorderStrong,
    BorderFocus,

    // Semantic colors
    Success,
    Warning,
    Error,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub primary_hover: Color,
    pub secondary: Color,
    pub secondary_hover: Color,
    pub accent: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,
    pub text_link: Color,

    // Border colors
    pub border: Color,
    pub border_strong: Color,
    pub border_focus: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryHover => self.secondary_hover,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceRaised => self.surface_raised,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::TextLink => self.text_link,
            ColorToken::Border => self.border,
            ColorToken::BorderStrong => self.border_strong,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
        }
    }
}
