//! CSS custom-property derivation.
//!
//! The variable map is derived 1:1 from a [`ResolvedTheme`] with a fixed
//! emission order, so deep-equal themes always yield byte-identical maps and
//! repeated application diffs to a no-op.

use indexmap::IndexMap;

use crate::resolve::ResolvedTheme;
use crate::tokens::ColorToken;

/// An ordered name → value mapping of CSS custom properties.
///
/// Names carry the `--` prefix. Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssVariableMap {
    vars: IndexMap<String, String>,
}

impl CssVariableMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Render as a `name: value; ...` inline style block.
    pub fn to_inline_style(&self) -> String {
        let mut out = String::with_capacity(self.vars.len() * 32);
        for (name, value) in &self.vars {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }

    fn insert(&mut self, name: &str, value: String) {
        self.vars.insert(name.to_string(), value);
    }
}

/// Fixed emission order for the color variables.
const COLOR_VARS: &[(&str, ColorToken)] = &[
    ("--color-primary", ColorToken::Primary),
    ("--color-primary-hover", ColorToken::PrimaryHover),
    ("--color-secondary", ColorToken::Secondary),
    ("--color-secondary-hover", ColorToken::SecondaryHover),
    ("--color-accent", ColorToken::Accent),
    ("--color-background", ColorToken::Background),
    ("--color-surface", ColorToken::Surface),
    ("--color-surface-raised", ColorToken::SurfaceRaised),
    ("--color-text", ColorToken::TextPrimary),
    ("--color-text-muted", ColorToken::TextSecondary),
    ("--color-text-inverse", ColorToken::TextInverse),
    ("--color-link", ColorToken::TextLink),
    ("--color-border", ColorToken::Border),
    ("--color-border-strong", ColorToken::BorderStrong),
    ("--color-border-focus", ColorToken::BorderFocus),
    ("--color-success", ColorToken::Success),
    ("--color-warning", ColorToken::Warning),
    ("--color-error", ColorToken::Error),
];

/// Derive the custom-property map for a resolved theme.
pub fn to_css_variables(theme: &ResolvedTheme) -> CssVariableMap {
    let mut vars = CssVariableMap::default();

    for (name, token) in COLOR_VARS {
        vars.insert(name, theme.colors.get(*token).to_css());
    }

    let ty = &theme.typography;
    vars.insert("--font-sans", ty.font_sans.to_string());
    vars.insert("--font-mono", ty.font_mono.to_string());
    vars.insert("--text-small", px(ty.size_small));
    vars.insert("--text-body", px(ty.size_body));
    vars.insert("--text-heading", px(ty.size_heading));
    vars.insert("--text-display", px(ty.size_display));
    vars.insert("--weight-regular", ty.weight_regular.to_string());
    vars.insert("--weight-medium", ty.weight_medium.to_string());
    vars.insert("--weight-bold", ty.weight_bold.to_string());
    vars.insert("--leading-body", trim_float(ty.leading_body));
    vars.insert("--leading-heading", trim_float(ty.leading_heading));

    let anim = &theme.animations;
    vars.insert("--motion-fast", ms(anim.duration_fast_ms));
    vars.insert("--motion-base", ms(anim.duration_base_ms));
    vars.insert("--motion-slow", ms(anim.duration_slow_ms));
    vars.insert("--easing-standard", anim.easing_standard.to_string());
    vars.insert("--easing-emphasized", anim.easing_emphasized.to_string());

    vars
}

fn px(v: f32) -> String {
    format!("{}px", trim_float(v))
}

fn ms(v: u32) -> String {
    format!("{v}ms")
}

fn trim_float(v: f32) -> String {
    let mut s = v.to_string();
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
