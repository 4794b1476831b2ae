//! Color conversion helpers for theme values
//!
//! Thin wrappers over the `palette` crate used by the color-picker
//! component workflow: templates and generated theme CSS express colors
//! as OKLCH strings while pickers and user input speak hex/rgb. All of
//! the actual color math is `palette`'s.
//!
//! Every function is infallible; unparseable input collapses to a neutral
//! fallback rather than an error, matching how the rest of the CLI treats
//! cosmetic failures.

use palette::{Clamp, FromColor, Oklch, Srgb};

/// Fallback for colors that cannot be parsed
const FALLBACK_OKLCH: &str = "oklch(0.5 0 0)";
const FALLBACK_HEX: &str = "#000000";

/// Convert any supported CSS color string to an `oklch(l c h)` string.
///
/// Accepts hex (`#rrggbb`), `rgb(r, g, b)`, CSS named colors, and OKLCH
/// strings (returned unchanged).
pub fn to_oklch(color: &str) -> String {
    let color = color.trim();

    if color.starts_with("oklch(") {
        return color.to_string();
    }

    match parse_srgb(color) {
        Some(srgb) => format_oklch(Oklch::from_color(srgb)),
        None => FALLBACK_OKLCH.to_string(),
    }
}

/// Convert an `oklch(l c h)` string to hex for color picker display
pub fn oklch_to_hex(oklch: &str) -> String {
    let Some((l, c, h)) = parse_oklch(oklch) else {
        return FALLBACK_HEX.to_string();
    };

    let rgb = Srgb::from_color(Oklch::new(l, c, h)).clamp();
    format!("#{:x}", rgb.into_format::<u8>())
}

/// Parse the numeric components of an `oklch(l c h)` string
pub fn parse_oklch(input: &str) -> Option<(f32, f32, f32)> {
    let inner = input
        .trim()
        .strip_prefix("oklch(")?
        .strip_suffix(')')?
        .trim();

    let mut parts = inner.split_whitespace().map(|v| v.parse::<f32>());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(l)), Some(Ok(c)), Some(Ok(h))) => Some((l, c, h)),
        _ => None,
    }
}

/// Whether the string parses as any supported color format
pub fn is_valid_color(color: &str) -> bool {
    let color = color.trim();
    if color.starts_with("oklch(") {
        return parse_oklch(color).is_some();
    }
    parse_srgb(color).is_some()
}

/// Black or white (as OKLCH) depending on the background's lightness
pub fn contrast_color(background: &str) -> String {
    let oklch = to_oklch(background);
    match parse_oklch(&oklch) {
        Some((l, _, _)) if l > 0.5 => "oklch(0 0 0)".to_string(),
        Some(_) => "oklch(1 0 0)".to_string(),
        None => "oklch(0 0 0)".to_string(),
    }
}

fn parse_srgb(color: &str) -> Option<Srgb<f32>> {
    if let Some(hex) = color.strip_prefix('#') {
        let rgb: Srgb<u8> = hex.parse().ok()?;
        return Some(rgb.into_format());
    }

    if let Some(inner) = color.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let mut parts = inner.split(',').map(|v| v.trim().parse::<f32>());
        return match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => {
                Some(Srgb::new(r / 255.0, g / 255.0, b / 255.0).clamp())
            }
            _ => None,
        };
    }

    palette::named::from_str(color).map(|rgb| rgb.into_format())
}

fn format_oklch(color: Oklch<f32>) -> String {
    let h = color.hue.into_positive_degrees();
    format!("oklch({:.3} {:.3} {:.1})", color.l, color.chroma, h)
}
