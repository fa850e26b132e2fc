use image::Rgba;

/// Default maximum RGB distance for a pixel to count as background.
pub const DEFAULT_TOLERANCE: f64 = 40.0;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Euclidean distance between two colors over the R, G and B channels.
/// Alpha is ignored.
pub fn distance(a: Rgba<u8>, b: Rgba<u8>) -> f64 {
    let sum: u32 = a.0[..3]
        .iter()
        .zip(&b.0[..3])
        .map(|(&x, &y)| {
            let d = x.abs_diff(y) as u32;
            d * d
        })
        .sum();
    (sum as f64).sqrt()
}

/// Whether `a` is within `tolerance` of `b`.
pub fn matches(a: Rgba<u8>, b: Rgba<u8>, tolerance: f64) -> bool {
    distance(a, b) <= tolerance
}

pub fn format_rgba(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    format!("({r}, {g}, {b}, {a})")
}
