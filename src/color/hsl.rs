use crate::{engine::xorshift::XorshiftLanes, foundation::core::Rgb};

/// Draw the icon color from the stream.
///
/// Consumes exactly 6 draws in fixed order: hue over the full spectrum,
/// saturation biased into 0.4..1.0 to avoid greyscale, and lightness as the
/// mean of four draws (bell-curve bias toward 0.5).
pub fn derive_color(engine: &mut XorshiftLanes) -> Rgb {
    let hue = engine.next_f64();
    let saturation = engine.next_f64() * 0.6 + 0.4;
    let lightness = (engine.next_f64() + engine.next_f64() + engine.next_f64() + engine.next_f64())
        / 4.0;
    hsl_to_rgb(hue, saturation, lightness)
}

/// Standard piecewise HSL→RGB conversion.
///
/// Hue is a fraction of the spectrum and wraps into [0, 1); saturation and
/// lightness clamp to [0, 1] (raw engine draws can exceed 1). Channels round
/// to the nearest integer in 0..=255.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    // Achromatic short-circuit.
    if s == 0.0 {
        let v = channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::new(
        channel(hue_segment(p, q, h + 1.0 / 3.0)),
        channel(hue_segment(p, q, h)),
        channel(hue_segment(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_segment(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
