//! Test utilities for imageops-autocrop
//!
//! This module provides image fixtures shared by the unit tests.
//! It is only compiled when running tests.

use image::Rgba;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::Image;

/// sRGB pink used for foreground squares
pub const PINK: Rgba<u8> = Rgba([228, 0, 140, 255]);

/// Opaque white used for plain backgrounds
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Creates an image filled with a single color.
///
/// # Arguments
/// * `width` - Width of the image to create
/// * `height` - Height of the image to create
/// * `color` - Fill color
pub fn create_uniform_image(width: u32, height: u32, color: Rgba<u8>) -> Image<Rgba<u8>> {
    Image::from_pixel(width, height, color)
}

/// Creates a square image with a centered square of `inner` color and a
/// uniform `border` pixels wide frame of `outer` color.
///
/// # Arguments
/// * `size` - Width and height of the image
/// * `border` - Width of the frame on every side
/// * `inner` - Color of the square
/// * `outer` - Color of the frame
///
/// # Returns
/// An RGBA image whose square spans `border..size - border` on both axes
pub fn create_bordered_square_image(
    size: u32,
    border: u32,
    inner: Rgba<u8>,
    outer: Rgba<u8>,
) -> Image<Rgba<u8>> {
    let mut image = create_uniform_image(size, size, outer);
    let side = size.saturating_sub(2 * border);
    if side > 0 {
        let rect = Rect::at(border as i32, border as i32).of_size(side, side);
        draw_filled_rect_mut(&mut image, rect, inner);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_uniform_image_with_valid_input_creates_image() {
        let image = create_uniform_image(3, 2, PINK);
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|pixel| *pixel == PINK));
    }

    #[test]
    fn create_bordered_square_image_with_valid_input_draws_square() {
        let image = create_bordered_square_image(10, 2, PINK, WHITE);
        assert_eq!(image.dimensions(), (10, 10));
        assert_eq!(image.get_pixel(1, 1), &WHITE);
        assert_eq!(image.get_pixel(2, 2), &PINK);
        assert_eq!(image.get_pixel(7, 7), &PINK);
        assert_eq!(image.get_pixel(8, 7), &WHITE);
    }
}
