///
/// A pixel stored as a packed 32-bit ARGB value (8 bits per channel, alpha in the top byte)
///
/// This is the format used by tile buffers and the output canvas. Colours are not blended,
/// so the alpha channel is carried through unchanged and only stripped by image writers that
/// don't support it.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ArgbPixel(pub u32);

impl ArgbPixel {
    /// Fully transparent black
    pub const TRANSPARENT: ArgbPixel = ArgbPixel(0x0000_0000);

    /// Opaque black (the default tile background)
    pub const OPAQUE_BLACK: ArgbPixel = ArgbPixel(0xff00_0000);

    /// Opaque white
    pub const WHITE: ArgbPixel = ArgbPixel(0xffff_ffff);

    ///
    /// Packs a pixel from its alpha, red, green and blue components
    ///
    #[inline]
    pub const fn from_components(alpha: u8, red: u8, green: u8, blue: u8) -> ArgbPixel {
        ArgbPixel(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | (blue as u32))
    }

    ///
    /// Creates an opaque pixel from red, green and blue components
    ///
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> ArgbPixel {
        Self::from_components(255, red, green, blue)
    }

    ///
    /// Retrieves the components of this pixel, as `[alpha, red, green, blue]`
    ///
    #[inline]
    pub const fn components(&self) -> [u8; 4] {
        let packed = self.0;
        [(packed >> 24) as u8, (packed >> 16) as u8, (packed >> 8) as u8, packed as u8]
    }

    /// The packed ARGB value
    #[inline]
    pub const fn packed(&self) -> u32 {
        self.0
    }

    /// The alpha component
    #[inline]
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    ///
    /// The colour components in the order used by truecolour TGA files (alpha is dropped)
    ///
    #[inline]
    pub const fn to_bgr(&self) -> [u8; 3] {
        let [_, red, green, blue] = self.components();
        [blue, green, red]
    }

    ///
    /// The components in RGBA byte order, as used by PNG files
    ///
    #[inline]
    pub const fn to_rgba(&self) -> [u8; 4] {
        let [alpha, red, green, blue] = self.components();
        [red, green, blue, alpha]
    }
}

impl From<u32> for ArgbPixel {
    #[inline]
    fn from(packed: u32) -> ArgbPixel {
        ArgbPixel(packed)
    }
}

impl From<ArgbPixel> for u32 {
    #[inline]
    fn from(pixel: ArgbPixel) -> u32 {
        pixel.0
    }
}
