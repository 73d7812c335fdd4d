//! Visual preference axes and their closed value sets.
//!
//! Every axis value carries a stable `id()` used for persistence and DOM
//! markers; `from_id` is the validating inverse used when reading stored
//! values back.

use std::fmt::{Display, Formatter};

/// Brand variant of the marketing surface (A/B brand looks).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrandVariant {
    #[default]
    A,
    B,
}

impl BrandVariant {
    /// Stable id for persistence and document markers.
    pub fn id(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }

    /// Validating parse of a stored id.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            _ => None,
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [BrandVariant] {
        const VARIANTS: [BrandVariant; 2] = [BrandVariant::A, BrandVariant::B];
        &VARIANTS
    }
}

impl Display for BrandVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Requested light/dark behavior. `Auto` defers to the ambient scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];
        &MODES
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Accessibility color profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    #[default]
    Default,
    HighContrast,
    ColorblindFriendly,
}

impl ColorProfile {
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::HighContrast => "high-contrast",
            Self::ColorblindFriendly => "colorblind-friendly",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "default" => Some(Self::Default),
            "high-contrast" => Some(Self::HighContrast),
            "colorblind-friendly" => Some(Self::ColorblindFriendly),
            _ => None,
        }
    }

    pub fn all() -> &'static [ColorProfile] {
        const PROFILES: [ColorProfile; 3] = [
            ColorProfile::Default,
            ColorProfile::HighContrast,
            ColorProfile::ColorblindFriendly,
        ];
        &PROFILES
    }
}

impl Display for ColorProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Concrete light/dark state after `ThemeMode::Auto` has been resolved
/// against the ambient signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Switch to the opposite scheme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for v in BrandVariant::all() {
            assert_eq!(BrandVariant::from_id(v.id()), Some(*v));
        }
        for m in ThemeMode::all() {
            assert_eq!(ThemeMode::from_id(m.id()), Some(*m));
        }
        for p in ColorProfile::all() {
            assert_eq!(ColorProfile::from_id(p.id()), Some(*p));
        }
    }

    #[test]
    fn foreign_ids_are_rejected() {
        assert_eq!(BrandVariant::from_id("c"), None);
        assert_eq!(ThemeMode::from_id("Dark"), None);
        assert_eq!(ColorProfile::from_id(""), None);
    }

    #[test]
    fn scheme_toggle() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
    }
}
