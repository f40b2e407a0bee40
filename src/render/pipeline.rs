use crate::{
    color::hsl::derive_color,
    encode::png::{encode_png, png_data_url},
    engine::xorshift::XorshiftLanes,
    foundation::{core::Rgb, error::BlockiconResult},
    icon::{grid::IconGrid, model::IconOptions},
    render::composite::{IconRgba, Palette, composite_grid},
};

/// Generate the raw pixel buffer for one icon.
///
/// This is the primary "one-shot" API below the encoders. One linear pass:
/// validate → seed → engine init → color draw → grid draw → composite. The
/// engine is a local value owned by this call, so concurrent calls are fully
/// independent and a given seed always reproduces the same buffer.
#[tracing::instrument(skip(opts), fields(size = opts.size, scale = opts.scale))]
pub fn generate_icon(opts: &IconOptions) -> BlockiconResult<IconRgba> {
    opts.validate()?;

    let seed = opts.resolve_seed();
    let mut engine = XorshiftLanes::from_seed(&seed);

    // The color draw always runs, even when every palette field is supplied,
    // so the grid consumes the same stream positions for a given seed.
    let derived = derive_color(&mut engine);
    let palette = Palette {
        background: opts.bg_color.unwrap_or(Rgb::WHITE),
        foreground: opts.fg_color.unwrap_or(derived),
        spot: opts.spot_color.unwrap_or(derived),
    };

    let grid = IconGrid::synthesize(&mut engine, opts.size);
    tracing::debug!(seed = %seed, side = opts.size * opts.scale, "compositing icon");
    Ok(composite_grid(&grid, opts.scale, &palette))
}

/// Generate one icon and encode it as truecolor PNG bytes.
pub fn generate_png(opts: &IconOptions) -> BlockiconResult<Vec<u8>> {
    encode_png(&generate_icon(opts)?)
}

/// Generate one icon as a `data:image/png;base64,` URL.
pub fn generate_data_url(opts: &IconOptions) -> BlockiconResult<String> {
    Ok(png_data_url(&generate_png(opts)?))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
