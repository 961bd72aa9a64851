use serde::{Deserialize, Serialize};

/// Packed cell color, `0x00RRGGBB`
///
/// The top byte belongs to the owner and is dropped when the color reaches the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const RED: Color = Color(0xFF0000);
    pub const GREEN: Color = Color(0x00FF00);
    pub const BLUE: Color = Color(0x0000FF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Value as written to a presentation buffer
    pub const fn to_pixel(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Build a color from hue, saturation and value, all in `[0, 1]`
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let c = v * s;
        let h_prime = (h.rem_euclid(1.0) * 6.0) % 6.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h_prime as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |f: f32| ((f + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_packs_channels() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.0, 0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_to_pixel_drops_owner_byte() {
        assert_eq!(Color(0xAB00FF00).to_pixel(), 0x0000FF00);
    }

    #[test]
    fn test_hsv_red() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::RED);
    }

    #[test]
    fn test_hsv_white_and_black() {
        assert_eq!(Color::from_hsv(0.3, 0.0, 1.0), Color::WHITE);
        assert_eq!(Color::from_hsv(0.7, 1.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_serde_is_a_bare_number() {
        let json = serde_json::to_string(&Color::GREEN).unwrap();
        assert_eq!(json, "65280");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::GREEN);
    }
}
