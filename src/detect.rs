//! Guesses the background color of an image from its outer border.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Returns the most common color on the image border.
///
/// The border is sampled column by column (top pixel, then bottom pixel) and
/// then row by row (left pixel, then right pixel), so corners are counted more
/// than once. Ties go to the color that was sampled first.
pub fn background_color(img: &RgbaImage) -> Result<Rgba<u8>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(Error::InvalidImage {
            width: w,
            height: h,
        });
    }

    let samples = (0..w)
        .flat_map(|x| [(x, 0), (x, h - 1)])
        .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]));

    // color -> (count, order of first appearance)
    let mut counts: HashMap<[u8; 4], (usize, usize)> = HashMap::new();
    for (order, (x, y)) in samples.enumerate() {
        let entry = counts.entry(img.get_pixel(x, y).0).or_insert((0, order));
        entry.0 += 1;
    }

    let (color, _) = counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .ok_or(Error::InvalidImage {
            width: w,
            height: h,
        })?;

    Ok(Rgba(color))
}
