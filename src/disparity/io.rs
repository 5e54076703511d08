//! I/O for disparity rasters, traversability masks and JSON reports.
//!
//! - `load_disparity`: read a single-channel 16-bit PNG into a [`DisparityField`].
//! - `save_disparity`: write a field back to the 16-bit wire format.
//! - `save_mask`: write a mask as an 8-bit grayscale PNG with values {0, 255}.
//! - `write_json_file`: pretty-print a serializable report to disk.
//!
//! Wire format: `disparity = raw / 16`, raw value `65535` marks an invalid
//! pixel. Encoding clamps to `65534` so a valid value never collides with
//! the sentinel.
use super::DisparityField;
use crate::mask::RegionMask;
use image::{ColorType, DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed-point scale of the 16-bit wire format.
pub const DISPARITY_SCALE: f32 = 16.0;
/// Raw sample marking an invalid pixel.
pub const INVALID_RAW: u16 = u16::MAX;

/// Errors produced while reading or writing rasters and reports.
#[derive(Debug)]
pub enum RasterError {
    /// The raster could not be opened or decoded at all.
    Read {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The raster decoded, but is not single-channel 16-bit.
    Format { path: PathBuf, found: ColorType },
    /// The output raster could not be encoded or written.
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Filesystem failure around a read or write.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A report value failed to serialize.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Format { path, found } => write!(
                f,
                "{}: expected single-channel 16-bit raster, found {found:?}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "failed to serialize {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Format { .. } => None,
        }
    }
}

/// Decode an owned 16-bit luma buffer into a disparity field.
pub fn decode_luma16(raster: &ImageBuffer<Luma<u16>, Vec<u16>>) -> DisparityField {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let mut field = DisparityField::new(w, h);
    for (i, &raw) in raster.as_raw().iter().enumerate() {
        if raw != INVALID_RAW {
            field.data[i] = Some(raw as f32 / DISPARITY_SCALE);
        }
    }
    field
}

/// Encode a disparity field into the 16-bit wire format.
pub fn encode_field(field: &DisparityField) -> ImageBuffer<Luma<u16>, Vec<u16>> {
    ImageBuffer::from_fn(field.w as u32, field.h as u32, |x, y| {
        match field.get(x as usize, y as usize) {
            Some(v) => {
                let raw = (v * DISPARITY_SCALE).round() as u32;
                Luma([raw.min(u32::from(INVALID_RAW - 1)) as u16])
            }
            None => Luma([INVALID_RAW]),
        }
    })
}

/// Load a disparity map from a single-channel 16-bit PNG.
pub fn load_disparity(path: &Path) -> Result<DisparityField, RasterError> {
    let img = image::open(path).map_err(|source| RasterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match img {
        DynamicImage::ImageLuma16(raster) => Ok(decode_luma16(&raster)),
        other => Err(RasterError::Format {
            path: path.to_path_buf(),
            found: other.color(),
        }),
    }
}

/// Save a disparity field in the 16-bit wire format.
pub fn save_disparity(field: &DisparityField, path: &Path) -> Result<(), RasterError> {
    ensure_parent_dir(path)?;
    encode_field(field)
        .save(path)
        .map_err(|source| RasterError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Save a region mask as an 8-bit grayscale PNG (255 = set, 0 = clear).
pub fn save_mask(mask: &RegionMask, path: &Path) -> Result<(), RasterError> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for y in 0..mask.h {
        for x in 0..mask.w {
            let v = if mask.get(x, y) { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    DynamicImage::ImageLuma8(out)
        .save(path)
        .map_err(|source| RasterError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), RasterError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| RasterError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| RasterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), RasterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| RasterError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
