/// Linear RGBA color, straight alpha.
///
/// Marker colors arrive as hex literals from route files, so the main
/// constructors take packed `0xRRGGBB` or byte quadruples.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    /// Marker color used while the sympathetic mode is active.
    pub const SYMPATHETIC: ColorRgba = ColorRgba::from_hex(0xff3366);
    /// Marker color used while the parasympathetic mode is active.
    pub const PARASYMPATHETIC: ColorRgba = ColorRgba::from_hex(0x3399ff);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from packed `0xRRGGBB`.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
            1.0,
        )
    }

    #[inline]
    pub fn from_srgb_u8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_matches_bytes() {
        assert_eq!(ColorRgba::from_hex(0x3399ff), ColorRgba::from_srgb_u8([0x33, 0x99, 0xff, 0xff]));
    }

    #[test]
    fn hex_channels() {
        let c = ColorRgba::from_hex(0xff0000);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));
    }
}
