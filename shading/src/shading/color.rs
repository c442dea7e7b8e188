use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn clamped(red: i64, green: i64, blue: i64) -> Self {
        let clamp = |c: i64| c.clamp(0, 255) as u8;
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    /// Multiply every channel by `shift`, truncating toward zero and then
    /// clamping to 0-255.
    pub fn shaded(self, shift: f64) -> Self {
        Self::new(
            shade_channel(self.red, shift),
            shade_channel(self.green, shift),
            shade_channel(self.blue, shift),
        )
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

// `as i64` truncates and saturates, NaN becomes 0.
fn shade_channel(channel: u8, shift: f64) -> u8 {
    ((channel as f64 * shift) as i64).clamp(0, 255) as u8
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
