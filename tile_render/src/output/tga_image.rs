use crate::error::*;
use crate::pixel::*;

use std::fs::{File};
use std::io::{Write, BufWriter};
use std::path::{Path};

/// Length of the header of a TGA file
pub const TGA_HEADER_LEN: usize = 18;

///
/// Generates the header for an uncompressed 24-bit truecolour TGA file
///
pub fn tga24_header(width: usize, height: usize) -> Result<[u8; TGA_HEADER_LEN], TileRenderError> {
    if width > u16::MAX as usize || height > u16::MAX as usize {
        return Err(TileRenderError::ImageTooLarge { width, height });
    }

    let mut header = [0u8; TGA_HEADER_LEN];

    header[2]   = 2;                            // Uncompressed truecolour
    header[12]  = (width & 0xff) as u8;
    header[13]  = ((width >> 8) & 0xff) as u8;
    header[14]  = (height & 0xff) as u8;
    header[15]  = ((height >> 8) & 0xff) as u8;
    header[16]  = 24;                           // Bits per pixel

    Ok(header)
}

///
/// Writes a pixel buffer to a stream as a 24-bit TGA image
///
/// The alpha channel is discarded and each pixel is written as a blue, green, red triplet. TGA images are
/// read from the bottom row up: set `flip_vertical` to write the rows in that order so the image displays
/// the right way up, or leave it unset to write the rows in the order they're stored.
///
pub fn write_tga24(target: impl Write, pixels: &PixelBuffer, flip_vertical: bool) -> Result<(), TileRenderError> {
    let mut target  = target;
    let header      = tga24_header(pixels.width(), pixels.height())?;

    target.write_all(&header)?;

    let mut row_bytes = Vec::with_capacity(pixels.width() * 3);
    let mut write_row = |row: &[ArgbPixel]| -> Result<(), TileRenderError> {
        row_bytes.clear();
        row_bytes.extend(row.iter().flat_map(|pixel| pixel.to_bgr()));
        target.write_all(&row_bytes)?;

        Ok(())
    };

    if flip_vertical {
        pixels.rows().rev().try_for_each(&mut write_row)?;
    } else {
        pixels.rows().try_for_each(&mut write_row)?;
    }

    target.flush()?;

    Ok(())
}

///
/// Writes a pixel buffer to a TGA file
///
pub fn save_tga24(path: impl AsRef<Path>, pixels: &PixelBuffer, flip_vertical: bool) -> Result<(), TileRenderError> {
    let file = File::create(path)?;

    write_tga24(BufWriter::new(file), pixels, flip_vertical)
}
