use crate::foundation::{
    core::Rgb,
    error::{BlockiconError, BlockiconResult},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Options for one generation call.
///
/// Every field is optional when deserialized; omitted fields fall back to
/// per-call defaults. Defaults are plain values, never shared state, so
/// options supplied in one call cannot leak into a later call's defaults.
pub struct IconOptions {
    /// Grid width and height in cells (the icon is always square).
    #[serde(default = "default_size")]
    pub size: u32,
    /// Output pixels per grid cell.
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Seed text; a random 16-hex-digit seed is drawn per call when absent.
    #[serde(default)]
    pub seed: Option<String>,
    /// Foreground color; defaults to the seed-derived color.
    #[serde(default)]
    pub fg_color: Option<Rgb>,
    /// Background color; defaults to white.
    #[serde(default)]
    pub bg_color: Option<Rgb>,
    /// Spot color; defaults to the same seed-derived color as `fg_color`.
    #[serde(default)]
    pub spot_color: Option<Rgb>,
}

fn default_size() -> u32 {
    7
}

fn default_scale() -> u32 {
    24
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            size: default_size(),
            scale: default_scale(),
            seed: None,
            fg_color: None,
            bg_color: None,
            spot_color: None,
        }
    }
}

impl IconOptions {
    /// Reject degenerate dimensions before any engine draw happens.
    pub fn validate(&self) -> BlockiconResult<()> {
        if self.size == 0 {
            return Err(BlockiconError::validation("size must be >= 1"));
        }
        if self.scale == 0 {
            return Err(BlockiconError::validation("scale must be >= 1"));
        }
        if self.size.checked_mul(self.scale).is_none() {
            return Err(BlockiconError::validation(
                "size * scale overflows the pixel side",
            ));
        }
        Ok(())
    }

    /// The caller's seed, or a fresh random 16-hex-digit one.
    pub(crate) fn resolve_seed(&self) -> String {
        match &self.seed {
            Some(seed) => seed.clone(),
            None => format!("{:016x}", rand::random::<u64>()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/icon/model.rs"]
mod tests;
