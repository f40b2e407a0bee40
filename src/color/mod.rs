pub mod hsl;
