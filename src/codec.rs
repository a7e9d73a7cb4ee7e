use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, GrayImage, ImageEncoder};
use tracing::debug;

use crate::error::PipelineError;

// Single-channel raster, never zero-sized
#[derive(Debug, Clone)]
pub struct DecodedImage {
    raster: GrayImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
}

// Decode whatever format the bytes carry and force it down to grayscale.
// The raw object is consumed here and freed once the raster exists.
pub fn decode(bits: Vec<u8>) -> Result<DecodedImage, PipelineError> {
    let raster = image::load_from_memory(&bits)
        .map_err(|err| PipelineError::DecodeFailure { source: Some(err) })?
        .into_luma8();
    drop(bits);

    // DecodedImage is never zero-sized, whatever the decoder lets through
    if raster.width() == 0 || raster.height() == 0 {
        return Err(PipelineError::DecodeFailure { source: None });
    }
    debug!("load image {}x{}", raster.width(), raster.height());
    Ok(DecodedImage { raster })
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    // PNG at the highest compression level
    pub fn encode_png(&self) -> Result<EncodedImage, PipelineError> {
        let mut bytes = Vec::new();
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive)
            .write_image(self.raster.as_raw(), self.width(), self.height(), ExtendedColorType::L8)
            .map_err(PipelineError::EncodeFailure)?;
        Ok(EncodedImage { bytes })
    }
}

impl EncodedImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
