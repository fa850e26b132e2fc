use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::alpha_bleed::alpha_bleed;
use crate::color::DEFAULT_TOLERANCE;
use crate::detect::background_color;
use crate::error::{Error, Result};
use crate::fill::erase_background;
use crate::image_io;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub tolerance: f64,
    /// Run alpha bleed over the erased area.
    pub bleed: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            bleed: false,
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub background: Rgba<u8>,
    pub erased: usize,
    pub total: usize,
}

impl Report {
    pub fn kept(&self) -> usize {
        self.total - self.erased
    }
}

/// Detects the background of `img` and erases it in place.
pub fn clean_image(img: &mut RgbaImage, options: &Options) -> Result<Report> {
    options.validate()?;

    let background = background_color(img)?;
    let erased = erase_background(img, background, options.tolerance);

    if options.bleed {
        alpha_bleed(img);
    }

    Ok(Report {
        background,
        erased,
        total: img.width() as usize * img.height() as usize,
    })
}

/// Loads `input`, erases its background and saves the result to `output`.
/// With no `output` the image is processed but nothing is written.
pub fn clean_file(input: &Path, output: Option<&Path>, options: &Options) -> Result<Report> {
    let mut img = image_io::load_rgba(input)?;
    let report = clean_image(&mut img, options)?;

    if let Some(output) = output {
        image_io::save_png(&img, output)?;
    }

    Ok(report)
}
