//! Gives fully transparent pixels the color of their nearest visible
//! neighbors, keeping them transparent. Without this, the (0, 0, 0, 0)
//! pixels left behind by the eraser show up as a dark fringe once the sprite
//! is scaled with bilinear filtering.

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::mask::Mask;

const DIRECTIONS: &[(i64, i64)] = &[
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn alpha_bleed(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();

    // Pixels whose color may be copied into a neighbor.
    let mut sources = Mask::new(w, h);
    // Pixels that are sources or already queued.
    let mut seen = Mask::new(w, h);
    let mut frontier = VecDeque::new();

    let around = move |x: u32, y: u32| {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            (nx >= 0 && ny >= 0 && nx < w as i64 && ny < h as i64).then_some((nx as u32, ny as u32))
        })
    };

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] != 0 {
            sources.set(x, y);
            seen.set(x, y);
        }
    }

    for y in 0..h {
        for x in 0..w {
            if !seen.get(x, y) && around(x, y).any(|(nx, ny)| sources.get(nx, ny)) {
                seen.set(x, y);
                frontier.push_back((x, y));
            }
        }
    }

    // Each pass only samples pixels finished in earlier passes, so a layer
    // never reads colors written by itself.
    while !frontier.is_empty() {
        let mut layer = Vec::with_capacity(frontier.len());

        for _ in 0..frontier.len() {
            let Some((x, y)) = frontier.pop_front() else {
                break;
            };

            let mut sum = [0u32; 3];
            let mut contributing = 0u32;
            for (nx, ny) in around(x, y) {
                if sources.get(nx, ny) {
                    let source = img.get_pixel(nx, ny);
                    for (acc, channel) in sum.iter_mut().zip(&source.0[..3]) {
                        *acc += *channel as u32;
                    }
                    contributing += 1;
                } else if !seen.get(nx, ny) {
                    seen.set(nx, ny);
                    frontier.push_back((nx, ny));
                }
            }

            let n = contributing.max(1);
            img.put_pixel(
                x,
                y,
                Rgba([
                    (sum[0] / n) as u8,
                    (sum[1] / n) as u8,
                    (sum[2] / n) as u8,
                    0,
                ]),
            );
            layer.push((x, y));
        }

        for (x, y) in layer {
            sources.set(x, y);
        }
    }
}
