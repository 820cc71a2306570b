//! Bitmap tile patterns used by the `bitmap` theme.

pub mod bitmap;
