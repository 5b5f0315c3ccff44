//! Real-world scenario tests
//!
//! These tests simulate the kinds of images autocrop is used on: product
//! shots on plain or graded backdrops, cut-outs with transparent padding and
//! soft gradients without a hard subject edge.

use image::Rgba;
use imageops_autocrop::{AlphaWeighting, AutoCrop, AutocropConfig, Image, Region};
use itertools::iproduct;

const PINK: Rgba<u8> = Rgba([228, 0, 140, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 80x80 image with a 70x70 pink square and a 5 pixel frame drawn by `frame`
fn create_pink_square_image(frame: impl Fn(u32, u32) -> Rgba<u8>) -> Image<Rgba<u8>> {
    Image::from_fn(80, 80, |x, y| {
        if (5..75).contains(&x) && (5..75).contains(&y) {
            PINK
        } else {
            frame(x, y)
        }
    })
}

/// Grayscale disc fading linearly from white at the center to black
fn create_radial_gradient_image(size: u32) -> Image<Rgba<u8>> {
    let center = (size as f64 - 1.0) / 2.0;
    let radius = size as f64 / 2.0;
    Image::from_fn(size, size, |x, y| {
        let distance = (x as f64 - center).hypot(y as f64 - center);
        let value = (255.0 - (distance * 255.0 / radius).floor()).max(0.0) as u8;
        Rgba([value, value, value, 255])
    })
}

fn assert_uniform(image: &Image<Rgba<u8>>, crop: Region, expected: Rgba<u8>) {
    for (y, x) in iproduct!(crop.min_y..crop.max_y, crop.min_x..crop.max_x) {
        assert_eq!(
            image.get_pixel(x, y),
            &expected,
            "unexpected pixel at ({x}, {y}) inside {crop:?}"
        );
    }
}

#[test]
fn plain_white_background_is_cropped_to_subject() {
    let image = create_pink_square_image(|_, _| WHITE);

    let crop = image.bounds_for_threshold(0.01).unwrap();

    assert_eq!(crop.dimensions(), (70, 70));
    assert_eq!(crop, Region::new(5, 5, 75, 75));
    assert_uniform(&image, crop, PINK);
}

#[test]
fn graded_background_is_cropped_to_subject() {
    let image = create_pink_square_image(|x, y| {
        Rgba([(x * 255 / 79) as u8, (y * 255 / 79) as u8, 128, 255])
    });

    let crop = image.bounds_for_threshold(0.1).unwrap();

    assert_eq!(crop.dimensions(), (70, 70));
    assert_uniform(&image, crop, PINK);
}

#[test]
fn low_threshold_keeps_graded_background() {
    // The gradient itself carries a little energy everywhere, so only the
    // outermost pixels past the first gradient samples are trimmed.
    let image = create_pink_square_image(|x, y| {
        Rgba([(x * 255 / 79) as u8, (y * 255 / 79) as u8, 128, 255])
    });

    let crop = image.bounds_for_threshold(0.01).unwrap();

    assert_eq!(crop, Region::new(2, 2, 78, 78));
}

#[test]
fn small_canvas_with_white_border_is_cropped_to_subject() {
    let image: Image<Rgba<u8>> = Image::from_fn(70, 70, |x, y| {
        if (5..65).contains(&x) && (5..65).contains(&y) {
            PINK
        } else {
            WHITE
        }
    });

    let crop = image.bounds_for_threshold(0.01).unwrap();

    assert_eq!(crop, Region::new(5, 5, 65, 65));
    assert_uniform(&image, crop, PINK);
}

#[test]
fn narrow_white_borders_are_cropped() {
    for border in 1..=3 {
        let image: Image<Rgba<u8>> = Image::from_fn(20, 20, |x, y| {
            let inside = |v: u32| v >= border && v < 20 - border;
            if inside(x) && inside(y) {
                PINK
            } else {
                WHITE
            }
        });

        let crop = image.bounds_for_threshold(0.01).unwrap();

        assert_ne!(crop, Region::from_dimensions(20, 20), "border {border}");
        assert_uniform(&image, crop, PINK);
    }
}

#[test]
fn transparent_padding_is_trimmed_at_any_threshold() {
    // Cut-out with colorful garbage hidden under zero alpha.
    let image: Image<Rgba<u8>> = Image::from_fn(40, 40, |x, y| {
        if (10..30).contains(&x) && (12..28).contains(&y) {
            Rgba([180, 60, 30, 255])
        } else {
            Rgba([
                (x * 97 + y * 13) as u8,
                (x * 31 + y * 151) as u8,
                (x * y) as u8,
                0,
            ])
        }
    });
    let subject = Region::new(10, 12, 30, 28);

    for weighting in [AlphaWeighting::Additive, AlphaWeighting::Multiplicative] {
        let config = AutocropConfig::default().with_alpha_weighting(weighting);
        for threshold in [0.0001, 0.01, 0.5] {
            let crop = image.bounds_for_threshold_with(threshold, &config).unwrap();
            assert!(subject.contains(&crop), "{weighting:?} {threshold}: {crop:?}");
            assert!(crop.width() >= 16 && crop.height() >= 12, "{crop:?}");
        }
    }
}

#[test]
fn opacity_edge_without_color_change_needs_additive_alpha() {
    // Same gray inside and out; only the alpha channel marks the subject.
    let image: Image<Rgba<u8>> = Image::from_fn(32, 32, |x, y| {
        let alpha = if (8..24).contains(&x) && (8..24).contains(&y) {
            255
        } else {
            0
        };
        Rgba([128, 128, 128, alpha])
    });

    let additive = image.bounds_for_threshold(0.01).unwrap();
    assert!(Region::new(8, 8, 24, 24).contains(&additive));
    assert!(!additive.is_empty());

    let config = AutocropConfig::default().with_alpha_weighting(AlphaWeighting::Multiplicative);
    let multiplicative = image.bounds_for_threshold_with(0.01, &config).unwrap();
    assert_eq!(multiplicative, Region::from_dimensions(32, 32));
}

#[test]
fn radial_gradient_is_cropped_further_for_higher_thresholds() {
    let image = create_radial_gradient_image(60);
    let thresholds = [0.3, 0.4, 0.5, 0.9];

    let mut last = image.bounds_for_threshold(0.1).unwrap();
    for threshold in thresholds {
        let crop = image.bounds_for_threshold(threshold).unwrap();
        assert!(
            last.contains(&crop) && crop != last,
            "expected bounds for threshold {threshold} to be smaller than {last:?} but was {crop:?}"
        );
        last = crop;
    }
}

#[test]
fn off_center_subject_is_cropped_asymmetrically() {
    let image: Image<Rgba<u8>> = Image::from_fn(64, 48, |x, y| {
        if (40..58).contains(&x) && (4..20).contains(&y) {
            Rgba([10, 80, 200, 255])
        } else {
            WHITE
        }
    });

    let crop = image.bounds_for_threshold(0.02).unwrap();

    assert_eq!(crop, Region::new(40, 4, 58, 20));
    assert_uniform(&image, crop, Rgba([10, 80, 200, 255]));
}

#[test]
fn subject_touching_image_edge_is_trimmed_like_other_edges() {
    let image: Image<Rgba<u8>> = Image::from_fn(40, 40, |x, y| {
        if x < 25 && (10..30).contains(&y) {
            PINK
        } else {
            WHITE
        }
    });

    let crop = image.bounds_for_threshold(0.05).unwrap();

    // The subject's own top and bottom edges light up the first column, which
    // the margin then steps past.
    assert_eq!(crop, Region::new(2, 10, 25, 30));
    assert_uniform(&image, crop, PINK);
}
