//! Blockicon deterministically renders small symmetric "blocky" identicons.
//!
//! Given a seed string, blockicon always produces the same PNG; given no seed,
//! it draws a random 16-hex-digit seed per call, so the output is random but
//! reproducible once the seed is known.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: fold the seed text into a 4-lane xorshift stream ([`XorshiftLanes`])
//! 2. **Color**: draw an HSL triple and convert it to RGB ([`derive_color`])
//! 3. **Grid**: synthesize a horizontally mirrored square of [`Cell`]s ([`IconGrid`])
//! 4. **Composite**: expand each cell into a scale×scale opaque block ([`IconRgba`])
//! 5. **Encode**: serialize as truecolor PNG, optionally as a base64 data URL
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Bit-exact determinism**: all engine arithmetic is 32-bit signed with
//!   explicit wraparound, so the stream matches the reference sequence exactly.
//! - **No shared state**: every generation call owns its own engine; concurrent
//!   calls are independent regardless of interleaving.
//! - **Straight RGBA8, alpha 255** everywhere in the output buffer.
//!
//! # Getting started
//!
//! ```
//! let opts = blockicon::IconOptions {
//!     seed: Some("alice@example.com".to_owned()),
//!     ..blockicon::IconOptions::default()
//! };
//! let png = blockicon::generate_png(&opts)?;
//! assert_eq!(png, blockicon::generate_png(&opts)?);
//! # Ok::<(), blockicon::BlockiconError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod encode;
mod engine;
mod foundation;
mod icon;
mod render;

pub use color::hsl::{derive_color, hsl_to_rgb};
pub use encode::png::{DATA_URL_PREFIX, encode_png, png_data_url};
pub use engine::xorshift::XorshiftLanes;
pub use foundation::core::Rgb;
pub use foundation::error::{BlockiconError, BlockiconResult};
pub use icon::grid::{Cell, IconGrid};
pub use icon::model::IconOptions;
pub use render::composite::{IconRgba, Palette, composite_grid};
pub use render::pipeline::{generate_data_url, generate_icon, generate_png};
