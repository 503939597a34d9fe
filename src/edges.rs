//
// edges.rs
// dicom-edge
//
// Converts decoded DICOM pixel data into a floating-point volume, runs Canny
// edge detection frame by frame, and casts the result to signed 16-bit for storage.
//

use dicom_pixeldata::DecodedPixelData;
use image::{GrayImage, Luma};
use imageproc::edges::canny;
use ndarray::Axis;

use crate::errors::ProcessError;

/// Edge-detection result for one dataset. Pixels are frame-major,
/// row-major within a frame, holding 0 or 255 per sample.
#[derive(Debug, Clone)]
pub struct EdgeVolume {
    pub frames: usize,
    pub rows: usize,
    pub columns: usize,
    pub pixels: Vec<i16>,
}

impl EdgeVolume {
    /// Shape as stored: `[rows, columns]` for a single frame,
    /// `[frames, rows, columns]` otherwise.
    pub fn logical_shape(&self) -> Vec<usize> {
        if self.frames == 1 {
            vec![self.rows, self.columns]
        } else {
            vec![self.frames, self.rows, self.columns]
        }
    }

    /// Serialize the samples as little-endian bytes for the PixelData element.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|v| v.to_le_bytes()).collect()
    }
}

/// Resolve the Rows/Columns attributes from an edge volume shape. A 3-axis
/// shape is frames-first, so rows and columns always sit on the trailing two
/// axes. Both attributes are unsigned 16-bit in DICOM.
pub fn resolve_dimensions(shape: &[usize]) -> Result<(u16, u16), ProcessError> {
    let (rows, columns) = match *shape {
        [rows, columns] => (rows, columns),
        [_, rows, columns] => (rows, columns),
        _ => {
            return Err(ProcessError::UnsupportedDimensionality { ndim: shape.len() });
        }
    };
    match (u16::try_from(rows), u16::try_from(columns)) {
        (Ok(rows), Ok(columns)) => Ok((rows, columns)),
        _ => Err(ProcessError::UnsupportedDimensionality { ndim: shape.len() }),
    }
}

/// Run Canny edge detection over every frame of the decoded pixel data.
///
/// The pixel values are extracted as a float volume, the sample axis is
/// collapsed by mean (a color dataset becomes its gray average), and the
/// whole volume is min-max scaled to the 8-bit range the detector operates
/// on, so the thresholds mean the same thing on every frame.
/// The two thresholds come straight from the run configuration; they are
/// not validated against each other.
pub fn detect(
    decoded: &DecodedPixelData<'_>,
    low_threshold: f32,
    high_threshold: f32,
) -> Result<EdgeVolume, ProcessError> {
    let volume = decoded
        .to_ndarray::<f32>()
        .map_err(|e| ProcessError::PixelData(Box::new(e)))?;

    // dicom-pixeldata yields frames x rows x columns x samples.
    if volume.ndim() != 4 {
        return Err(ProcessError::UnsupportedDimensionality {
            ndim: volume.ndim(),
        });
    }
    let volume = match volume.mean_axis(Axis(3)) {
        Some(v) => v,
        None => {
            return Err(ProcessError::UnsupportedDimensionality {
                ndim: volume.ndim(),
            });
        }
    };

    let shape = volume.shape().to_vec();
    let (frames, rows, columns) = (shape[0], shape[1], shape[2]);

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &value in volume.iter() {
        min = min.min(value);
        max = max.max(value);
    }
    // A flat image maps to all zeros rather than dividing by zero.
    let span = if max > min { max - min } else { 1.0 };

    let mut pixels = Vec::with_capacity(frames * rows * columns);
    for frame in 0..frames {
        let slice = volume.index_axis(Axis(0), frame);
        let mut gray = GrayImage::new(columns as u32, rows as u32);
        for row in 0..rows {
            for col in 0..columns {
                let scaled = ((slice[[row, col]] - min) / span * 255.0).clamp(0.0, 255.0);
                gray.put_pixel(col as u32, row as u32, Luma([scaled as u8]));
            }
        }
        let edge_map = canny(&gray, low_threshold, high_threshold);
        pixels.extend(edge_map.pixels().map(|p| i16::from(p.0[0])));
    }

    Ok(EdgeVolume {
        frames,
        rows,
        columns,
        pixels,
    })
}
