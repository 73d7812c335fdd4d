//! Hirely Theme System
//!
//! Brand theming for the hirely frontend: design tokens, A/B brand variant
//! palettes, and pure resolution of the three visual preference axes into a
//! concrete token set plus its CSS custom-property map.
//!
//! # Overview
//!
//! - **Axes**: [`BrandVariant`], [`ThemeMode`], [`ColorProfile`] — the three
//!   independently-set visual preferences, each a closed value set with
//!   stable string ids.
//! - **Resolution**: [`resolve`] combines the axes and the ambient dark
//!   signal into a [`ResolvedTheme`]. It is a pure function: no hidden
//!   state, deterministic, safe to memoize by input tuple.
//! - **CSS derivation**: [`to_css_variables`] maps a resolved theme to an
//!   order-stable [`CssVariableMap`] so repeated DOM application diffs to a
//!   no-op.
//!
//! # Quick start
//!
//! ```rust
//! use hirely_theme::{resolve, to_css_variables, BrandVariant, ColorProfile, ThemeMode};
//!
//! let theme = resolve(BrandVariant::A, ThemeMode::Auto, ColorProfile::Default, true);
//! assert!(theme.scheme.is_dark());
//!
//! let vars = to_css_variables(&theme);
//! assert!(vars.get("--color-primary").is_some());
//! ```

pub mod axes;
pub mod color;
pub mod css;
pub mod resolve;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use axes::{BrandVariant, ColorProfile, ColorScheme, ThemeMode};
pub use color::Color;
pub use css::{to_css_variables, CssVariableMap};
pub use resolve::{effective_scheme, resolve, ResolvedTheme};
pub use tokens::*;
