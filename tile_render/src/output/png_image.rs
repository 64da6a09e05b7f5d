use crate::error::*;
use crate::pixel::*;

use std::fs::{File};
use std::io::{Write, BufWriter};
use std::path::{Path};

///
/// Writes rendered canvases to a stream as 8-bit RGBA PNG files
///
pub struct PngRenderTarget<TStream>
where
    TStream: Write,
{
    target: BufWriter<TStream>,
}

impl<TStream> PngRenderTarget<TStream>
where
    TStream: Write,
{
    ///
    /// Creates a PNG writer that will write to a stream
    ///
    pub fn from_stream(target: TStream) -> Self {
        Self::from_bufwriter(BufWriter::new(target))
    }

    ///
    /// Creates a PNG writer that will write to a bufwriter
    ///
    pub fn from_bufwriter(target: BufWriter<TStream>) -> Self {
        PngRenderTarget {
            target: target,
        }
    }

    ///
    /// Encodes a canvas as a PNG image
    ///
    pub fn write(&mut self, pixels: &PixelBuffer) -> Result<(), TileRenderError> {
        let pixel_data  = pixels.pixels().iter().flat_map(|pixel| pixel.to_rgba()).collect::<Vec<u8>>();

        {
            let mut encoder = png::Encoder::new(&mut self.target, pixels.width() as u32, pixels.height() as u32);

            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // The image is finished off when the writer is dropped
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&pixel_data)?;
        }

        self.target.flush()?;

        Ok(())
    }

    ///
    /// Retrieves the stream that the images were written to
    ///
    pub fn into_inner(self) -> Result<TStream, TileRenderError> {
        self.target.into_inner().map_err(|err| err.into_error().into())
    }
}

///
/// Writes a pixel buffer to a PNG file
///
pub fn save_png(path: impl AsRef<Path>, pixels: &PixelBuffer) -> Result<(), TileRenderError> {
    let file = File::create(path)?;

    PngRenderTarget::from_stream(file).write(pixels)
}
