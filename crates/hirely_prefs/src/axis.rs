//! Preference axes.
//!
//! Each axis is an independently-set preference dimension with a closed
//! value set, a default, and a fixed storage key. Cross-axis derivation
//! (theme resolution) happens in consumers, never here.

use std::fmt::{Display, Formatter};

use hirely_locale::LocaleCatalog;
use hirely_theme::{BrandVariant, ColorProfile, ThemeMode};

/// One independently-settable preference dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefAxis {
    Variant,
    Mode,
    ColorProfile,
    Language,
}

impl PrefAxis {
    pub const COUNT: usize = 4;

    /// Fixed key under which this axis is durably persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Variant => "variant",
            Self::Mode => "mode",
            Self::ColorProfile => "color_profile",
            Self::Language => "language",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Variant => 0,
            Self::Mode => 1,
            Self::ColorProfile => 2,
            Self::Language => 3,
        }
    }

    pub fn all() -> &'static [PrefAxis] {
        const AXES: [PrefAxis; PrefAxis::COUNT] = [
            PrefAxis::Variant,
            PrefAxis::Mode,
            PrefAxis::ColorProfile,
            PrefAxis::Language,
        ];
        &AXES
    }
}

impl Display for PrefAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// A value on one preference axis.
#[derive(Clone, Debug, PartialEq)]
pub enum PrefValue {
    Variant(BrandVariant),
    Mode(ThemeMode),
    ColorProfile(ColorProfile),
    Language(String),
}

impl PrefValue {
    pub fn axis(&self) -> PrefAxis {
        match self {
            Self::Variant(_) => PrefAxis::Variant,
            Self::Mode(_) => PrefAxis::Mode,
            Self::ColorProfile(_) => PrefAxis::ColorProfile,
            Self::Language(_) => PrefAxis::Language,
        }
    }

    /// The stable string form used for persistence.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Variant(v) => v.id(),
            Self::Mode(m) => m.id(),
            Self::ColorProfile(p) => p.id(),
            Self::Language(key) => key,
        }
    }
}

/// Validate a raw string against an axis's allowed set.
///
/// `None` means the value is outside the set — callers decide whether that
/// is a rejected `set` or a corrupt persisted value to silently discard.
pub fn parse_axis_value(axis: PrefAxis, raw: &str, catalog: &LocaleCatalog) -> Option<PrefValue> {
    match axis {
        PrefAxis::Variant => BrandVariant::from_id(raw).map(PrefValue::Variant),
        PrefAxis::Mode => ThemeMode::from_id(raw).map(PrefValue::Mode),
        PrefAxis::ColorProfile => ColorProfile::from_id(raw).map(PrefValue::ColorProfile),
        PrefAxis::Language => catalog
            .contains(raw)
            .then(|| PrefValue::Language(raw.to_string())),
    }
}

/// The default value used when no valid persisted value exists.
pub fn default_axis_value(axis: PrefAxis, catalog: &LocaleCatalog) -> PrefValue {
    match axis {
        PrefAxis::Variant => PrefValue::Variant(BrandVariant::default()),
        PrefAxis::Mode => PrefValue::Mode(ThemeMode::default()),
        PrefAxis::ColorProfile => PrefValue::ColorProfile(ColorProfile::default()),
        PrefAxis::Language => PrefValue::Language(catalog.default_key().to_string()),
    }
}
