//! QR code generation for the page's public URL.

use anyhow::{Context, Result};
use qrcode::QrCode;
use qrcode::render::svg;

/// Renders the given URL as an inline SVG QR code. The dark modules use
/// `currentColor` so the code follows the active theme.
pub fn qr_svg(url: &str) -> Result<String> {
    let code = QrCode::new(url.as_bytes())
        .with_context(|| format!("Failed to QR-encode {}", url))?;

    let rendered = code
        .render::<svg::Color>()
        .min_dimensions(144, 144)
        .dark_color(svg::Color("currentColor"))
        .light_color(svg::Color("transparent"))
        .build();

    Ok(rendered)
}
