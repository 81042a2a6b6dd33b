#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {

    pub fn zero() -> Self {
        Self::black()
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Quantizes a color with channels in [0.0, 1.0] to a displayable pixel.
    /// Values outside that range are clamped here and only here: color math
    /// upstream accumulates unclamped.
    pub fn from_normalized(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgb(
            channel_to_byte(red),
            channel_to_byte(green),
            channel_to_byte(blue),
        )
    }
}

fn channel_to_byte(value: f64) -> u8 {
    (value.max(0.0).min(1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_normalized_in_range() {
        assert_eq!(Pixel::from_normalized(0.0, 0.5, 1.0), Pixel::from_rgb(0, 128, 255));
    }

    #[test]
    fn test_from_normalized_clamps_overflow() {
        assert_eq!(Pixel::from_normalized(1.7, 2.0, 1.0), Pixel::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_from_normalized_clamps_negative() {
        assert_eq!(Pixel::from_normalized(-0.3, 0.0, -10.0), Pixel::from_rgb(0, 0, 0));
    }
}
