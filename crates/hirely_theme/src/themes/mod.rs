//! Brand variant palettes.
//!
//! Each brand variant contributes a light and a dark base palette; the full
//! token set is derived from the base palette so hover and focus states stay
//! consistent across variants.

use crate::axes::{BrandVariant, ColorScheme};
use crate::color::Color;
use crate::tokens::ColorTokens;

#[derive(Clone, Copy)]
struct BasePalette {
    brand: Color,
    brand_companion: Color,
    accent: Color,
    background: Color,
    surface: Color,
    surface_raised: Color,
    ink: Color,
    ink_muted: Color,
    ink_inverse: Color,
    outline: Color,
    positive: Color,
    caution: Color,
    negative: Color,
}

/// Build the color tokens for a brand variant under a concrete scheme.
pub fn color_tokens(variant: BrandVariant, scheme: ColorScheme) -> ColorTokens {
    let base = match (variant, scheme) {
        (BrandVariant::A, ColorScheme::Light) => variant_a_light(),
        (BrandVariant::A, ColorScheme::Dark) => variant_a_dark(),
        (BrandVariant::B, ColorScheme::Light) => variant_b_light(),
        (BrandVariant::B, ColorScheme::Dark) => variant_b_dark(),
    };
    build_tokens(base, scheme)
}

fn build_tokens(base: BasePalette, scheme: ColorScheme) -> ColorTokens {
    // Hover states shift toward black in light schemes and toward white in
    // dark schemes so they stay visible against the base tone.
    let (hover_mix, state_target) = match scheme {
        ColorScheme::Light => (0.12, Color::BLACK),
        ColorScheme::Dark => (0.16, Color::WHITE),
    };

    ColorTokens {
        primary: base.brand,
        primary_hover: blend(base.brand, state_target, hover_mix),
        secondary: base.brand_companion,
        secondary_hover: blend(base.brand_companion, state_target, hover_mix),
        accent: base.accent,
        background: base.background,
        surface: base.surface,
        surface_raised: base.surface_raised,
        text_primary: base.ink,
        text_secondary: base.ink_muted,
        text_inverse: base.ink_inverse,
        text_link: base.brand,
        border: base.outline,
        border_strong: blend(base.outline, state_target, 0.25),
        border_focus: base.brand,
        success: base.positive,
        warning: base.caution,
        error: base.negative,
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}

// Variant A: the core recruiting brand, indigo on warm neutrals.

fn variant_a_light() -> BasePalette {
    BasePalette {
        brand: Color::from_hex(0x4F46E5),
        brand_companion: Color::from_hex(0x7C3AED),
        accent: Color::from_hex(0xF59E0B),
        background: Color::from_hex(0xFAFAF9),
        surface: Color::WHITE,
        surface_raised: Color::from_hex(0xF5F5F4),
        ink: Color::from_hex(0x1C1917),
        ink_muted: Color::from_hex(0x57534E),
        ink_inverse: Color::from_hex(0xFAFAF9),
        outline: Color::from_hex(0xE7E5E4),
        positive: Color::from_hex(0x16A34A),
        caution: Color::from_hex(0xD97706),
        negative: Color::from_hex(0xDC2626),
    }
}

fn variant_a_dark() -> BasePalette {
    BasePalette {
        brand: Color::from_hex(0x818CF8),
        brand_companion: Color::from_hex(0xA78BFA),
        accent: Color::from_hex(0xFBBF24),
        background: Color::from_hex(0x0C0A09),
        surface: Color::from_hex(0x1C1917),
        surface_raised: Color::from_hex(0x292524),
        ink: Color::from_hex(0xFAFAF9),
        ink_muted: Color::from_hex(0xA8A29E),
        ink_inverse: Color::from_hex(0x1C1917),
        outline: Color::from_hex(0x292524),
        positive: Color::from_hex(0x4ADE80),
        caution: Color::from_hex(0xFBBF24),
        negative: Color::from_hex(0xF87171),
    }
}

// Variant B: the experiment brand, teal on cool neutrals.

fn variant_b_light() -> BasePalette {
    BasePalette {
        brand: Color::from_hex(0x0D9488),
        brand_companion: Color::from_hex(0x0284C7),
        accent: Color::from_hex(0xE11D48),
        background: Color::from_hex(0xF8FAFC),
        surface: Color::WHITE,
        surface_raised: Color::from_hex(0xF1F5F9),
        ink: Color::from_hex(0x0F172A),
        ink_muted: Color::from_hex(0x475569),
        ink_inverse: Color::from_hex(0xF8FAFC),
        outline: Color::from_hex(0xE2E8F0),
        positive: Color::from_hex(0x15803D),
        caution: Color::from_hex(0xB45309),
        negative: Color::from_hex(0xBE123C),
    }
}

fn variant_b_dark() -> BasePalette {
    BasePalette {
        brand: Color::from_hex(0x2DD4BF),
        brand_companion: Color::from_hex(0x38BDF8),
        accent: Color::from_hex(0xFB7185),
        background: Color::from_hex(0x020817),
        surface: Color::from_hex(0x0F172A),
        surface_raised: Color::from_hex(0x1E293B),
        ink: Color::from_hex(0xF8FAFC),
        ink_muted: Color::from_hex(0x94A3B8),
        ink_inverse: Color::from_hex(0x0F172A),
        outline: Color::from_hex(0x1E293B),
        positive: Color::from_hex(0x4ADE80),
        caution: Color::from_hex(0xFBBF24),
        negative: Color::from_hex(0xFB7185),
    }
}
