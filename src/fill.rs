//! Erases the background region connected to the image corners.

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::color::{self, TRANSPARENT};
use crate::mask::Mask;

/// Flood fills from the four corners, setting every pixel within `tolerance`
/// of `background` to fully transparent. The fill spreads up, down, left and
/// right only, and stops at pixels that do not match. Every pixel is compared
/// against the same `background`, not against its neighbor.
///
/// Returns the number of pixels erased.
pub fn erase_background(img: &mut RgbaImage, background: Rgba<u8>, tolerance: f64) -> usize {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return 0;
    }

    let mut visited = Mask::new(w, h);
    let mut to_visit = VecDeque::new();

    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        if !visited.get(x, y) {
            visited.set(x, y);
            to_visit.push_back((x, y));
        }
    }

    let neighbors = |x: u32, y: u32| {
        [
            x.checked_sub(1).map(|x| (x, y)),
            (x + 1 < w).then_some((x + 1, y)),
            y.checked_sub(1).map(|y| (x, y)),
            (y + 1 < h).then_some((x, y + 1)),
        ]
        .into_iter()
        .flatten()
    };

    let mut erased = 0;
    while let Some((x, y)) = to_visit.pop_front() {
        if !color::matches(*img.get_pixel(x, y), background, tolerance) {
            continue;
        }

        img.put_pixel(x, y, TRANSPARENT);
        erased += 1;

        for (nx, ny) in neighbors(x, y) {
            if !visited.get(nx, ny) {
                visited.set(nx, ny);
                to_visit.push_back((nx, ny));
            }
        }
    }

    erased
}
