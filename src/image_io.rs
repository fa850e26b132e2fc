use std::io::{Cursor, Write};
use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Loads an image from disk and converts it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref e) if e.kind() == std::io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        source => Error::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(img.to_rgba8())
}

/// Encodes `img` as PNG and writes it to `path`.
///
/// The bytes go to a temporary file next to `path` which is then renamed over
/// it, so a failed save never leaves a truncated PNG behind. A new file gets
/// the usual umask-derived mode; an overwritten file keeps its permissions.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| Error::write(path, std::io::Error::other(e)))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| Error::write(path, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::write(path, e))?;
    }
    tmp.write_all(&buf).map_err(|e| Error::write(path, e))?;
    tmp.persist(path).map_err(|e| Error::write(path, e.error))?;

    Ok(())
}
