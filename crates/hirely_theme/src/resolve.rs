//! Theme resolution.
//!
//! `resolve` is a pure function of its four inputs. Identical inputs always
//! produce a deep-equal [`ResolvedTheme`], so results are safe to memoize by
//! the `(variant, mode, profile, ambient_dark)` tuple.

use crate::axes::{BrandVariant, ColorProfile, ColorScheme, ThemeMode};
use crate::color::Color;
use crate::themes;
use crate::tokens::{AnimationTokens, ColorTokens, TypographyTokens};

/// The deterministic output of combining the three visual axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub variant: BrandVariant,
    pub scheme: ColorScheme,
    pub profile: ColorProfile,
    /// Accessibility branch for consumers that render differently under
    /// high contrast, independent of the token substitution below.
    pub high_contrast: bool,
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub animations: AnimationTokens,
}

/// Resolve `Auto` against the ambient signal.
///
/// Dark iff the mode is `Dark`, or the mode is `Auto` and the ambient
/// scheme is dark.
pub fn effective_scheme(mode: ThemeMode, ambient_dark: bool) -> ColorScheme {
    match mode {
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::Auto if ambient_dark => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}

/// Resolve the three visual axes into concrete design tokens.
pub fn resolve(
    variant: BrandVariant,
    mode: ThemeMode,
    profile: ColorProfile,
    ambient_dark: bool,
) -> ResolvedTheme {
    let scheme = effective_scheme(mode, ambient_dark);
    let colors = themes::color_tokens(variant, scheme);
    let colors = match profile {
        ColorProfile::Default => colors,
        ColorProfile::HighContrast => apply_high_contrast(colors, scheme),
        ColorProfile::ColorblindFriendly => apply_colorblind_friendly(colors, scheme),
    };

    ResolvedTheme {
        variant,
        scheme,
        profile,
        high_contrast: profile == ColorProfile::HighContrast,
        colors,
        typography: TypographyTokens::default(),
        animations: AnimationTokens::default(),
    }
}

/// Push text and borders toward the scheme's extreme for legibility.
fn apply_high_contrast(mut colors: ColorTokens, scheme: ColorScheme) -> ColorTokens {
    let extreme = match scheme {
        ColorScheme::Light => Color::BLACK,
        ColorScheme::Dark => Color::WHITE,
    };
    colors.text_primary = extreme;
    colors.text_secondary = Color::lerp(&colors.text_secondary, &extreme, 0.5);
    colors.border = Color::lerp(&colors.border, &extreme, 0.45);
    colors.border_strong = Color::lerp(&colors.border_strong, &extreme, 0.6);
    colors
}

/// Remap the red/green semantic pair onto a blue/orange pair that stays
/// distinguishable under the common color-vision deficiencies.
fn apply_colorblind_friendly(mut colors: ColorTokens, scheme: ColorScheme) -> ColorTokens {
    let (positive, negative) = match scheme {
        ColorScheme::Light => (Color::from_hex(0x0072B2), Color::from_hex(0xD55E00)),
        ColorScheme::Dark => (Color::from_hex(0x56B4E9), Color::from_hex(0xE69F00)),
    };
    colors.success = positive;
    colors.error = negative;
    colors
}
