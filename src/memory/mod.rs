//! Program images that bytecode is decoded from.

mod image;

#[cfg(test)]
mod tests;

pub use image::Image;
