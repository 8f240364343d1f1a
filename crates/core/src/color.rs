//! 8-bit RGBA color type and per-channel transforms.
//!
//! Every transform works on the red, green and blue channels, passes alpha
//! through untouched, and silently clamps results to `[0, 255]`. Intermediate
//! arithmetic is done in `f64`.

use crate::error::ToolkitError;
use crate::geometry::Vector3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest channel value.
pub const CHANNEL_MAX: f64 = 255.0;

/// Output level a channel at the mean is mapped to by [`color_scale`].
const SCALE_CENTER: f64 = 128.0;

/// Number of output levels one standard deviation spans in [`color_scale`].
const SCALE_SPREAD: f64 = 64.0;

/// RGBA color with 8-bit channels.
///
/// Serializes as a hex string: `"#rrggbb"` when opaque, `"#rrggbbaa"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy with the red, green and blue channels replaced.
    fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: self.a }
    }

    /// Applies `f` to each of the red, green and blue channels.
    fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        self.with_rgb(
            to_channel(f(f64::from(self.r))),
            to_channel(f(f64::from(self.g))),
            to_channel(f(f64::from(self.b))),
        )
    }

    /// The red, green and blue channels as a vector.
    pub fn to_vector(self) -> Vector3 {
        Vector3::new(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Builds an opaque color from a vector, rounding and clamping each component.
    pub fn from_vector(v: Vector3) -> Self {
        Self::rgb(to_channel(v.x), to_channel(v.y), to_channel(v.z))
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case insensitive).
    ///
    /// Returns `ToolkitError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Color, ToolkitError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ToolkitError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.is_ascii() {
            return Err(ToolkitError::InvalidColor(format!(
                "non-ascii color string: {hex}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| ToolkitError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Color { r, g, b, a })
    }

    /// Formats the color as `"#rrggbb"`, or `"#rrggbbaa"` when not fully opaque.
    pub fn to_hex(self) -> String {
        let Color { r, g, b, a } = self;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Rounds and clamps a value into the channel range. NaN maps to 0.
fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, CHANNEL_MAX) as u8
}

/// Contrast normalization around a mean and standard deviation.
///
/// Each channel becomes `128 + (c - mean) * 64 / std`, so the mean lands on
/// mid-grey and one standard deviation spans 64 levels. A `std` of zero or
/// less means "no scaling" and returns `color` unchanged.
pub fn color_scale(color: Color, mean: f64, std: f64) -> Color {
    if std <= 0.0 || std.is_nan() {
        return color;
    }
    color.map_rgb(|c| SCALE_CENTER + (c - mean) * SCALE_SPREAD / std)
}

/// Linearly remaps each channel from `[x0, x1]` onto `[0, 255]`, clamped.
///
/// With `x0 == x1` the map degenerates to a step: channels at or above `x0`
/// become 255, the rest 0.
pub fn color_scale2(color: Color, x0: f64, x1: f64) -> Color {
    if x1 == x0 {
        return color.map_rgb(|c| if c >= x0 { CHANNEL_MAX } else { 0.0 });
    }
    color.map_rgb(|c| (c - x0) * CHANNEL_MAX / (x1 - x0))
}

/// Power-law gamma correction: `shift + 255 * (c / 255)^exponent` per channel.
///
/// `shift` is expressed in channel levels. `gamma(c, 1.0, 0.0) == c`.
pub fn gamma(color: Color, exponent: f64, shift: f64) -> Color {
    color.map_rgb(|c| shift + CHANNEL_MAX * (c / CHANNEL_MAX).powf(exponent))
}

/// Euclidean length of the red, green and blue channels.
pub fn color_length(color: Color) -> f64 {
    color.to_vector().length()
}

/// Unweighted average of the red, green and blue channels.
pub fn greyscale_intensity(color: Color) -> u8 {
    let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
    (sum / 3) as u8
}

/// True when every channel of `a` is within the matching component of `spread` of `b`.
pub fn colors_are_close(a: Color, b: Color, spread: Vector3) -> bool {
    crate::geometry::vectors_are_close(a.to_vector(), b.to_vector(), spread)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- hex parsing --

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        let a = Color::from_hex("#ff8000").unwrap();
        let b = Color::from_hex("FF8000").unwrap();
        assert_eq!(a, Color::rgb(255, 128, 0));
        assert_eq!(a, b);
    }

    #[test]
    fn from_hex_parses_alpha() {
        let c = Color::from_hex("#10203040").unwrap();
        assert_eq!(c, Color::rgba(0x10, 0x20, 0x30, 0x40));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ToolkitError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn from_hex_rejects_multibyte_input() {
        assert!(Color::from_hex("ééé").is_err());
    }

    #[test]
    fn to_hex_omits_alpha_when_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 170)).unwrap();
        assert_eq!(json, "\"#ff00aa\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(255, 0, 170));
    }

    #[test]
    fn deserialize_rejects_bad_hex() {
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    // -- vector conversion --

    #[test]
    fn from_vector_rounds_and_clamps() {
        let c = Color::from_vector(Vector3::new(-4.0, 127.6, 300.0));
        assert_eq!(c, Color::rgb(0, 128, 255));
    }

    #[test]
    fn to_vector_drops_alpha() {
        let v = Color::rgba(10, 20, 30, 0).to_vector();
        assert_eq!(v, Vector3::new(10.0, 20.0, 30.0));
    }

    // -- color_scale --

    #[test]
    fn color_scale_non_positive_std_is_identity() {
        let c = Color::rgba(12, 200, 99, 7);
        assert_eq!(color_scale(c, 50.0, 0.0), c);
        assert_eq!(color_scale(c, 50.0, -3.0), c);
    }

    #[test]
    fn color_scale_maps_mean_to_mid_grey() {
        let c = color_scale(Color::rgb(90, 90, 90), 90.0, 20.0);
        assert_eq!(c, Color::rgb(128, 128, 128));
    }

    #[test]
    fn color_scale_clamps_far_outliers() {
        let c = color_scale(Color::rgb(0, 255, 128), 128.0, 10.0);
        assert_eq!(c.r, 0);
        assert_eq!(c.g, 255);
        assert_eq!(c.b, 128);
    }

    // -- color_scale2 --

    #[test]
    fn color_scale2_stretches_range() {
        let c = color_scale2(Color::rgb(50, 100, 150), 50.0, 150.0);
        assert_eq!(c, Color::rgb(0, 128, 255));
    }

    #[test]
    fn color_scale2_clamps_outside_range() {
        let c = color_scale2(Color::rgb(0, 255, 10), 20.0, 200.0);
        assert_eq!(c.r, 0);
        assert_eq!(c.g, 255);
    }

    #[test]
    fn color_scale2_equal_bounds_is_a_step() {
        let c = color_scale2(Color::rgb(99, 100, 101), 100.0, 100.0);
        assert_eq!(c, Color::rgb(0, 255, 255));
    }

    // -- gamma --

    #[test]
    fn gamma_square_darkens_midtones() {
        let c = gamma(Color::rgb(128, 0, 255), 2.0, 0.0);
        assert_eq!(c.r, 64);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 255);
    }

    #[test]
    fn gamma_shift_is_clamped() {
        let c = gamma(Color::rgb(250, 10, 0), 1.0, 20.0);
        assert_eq!(c, Color::rgb(255, 30, 20));
    }

    #[test]
    fn gamma_preserves_alpha() {
        let c = gamma(Color::rgba(10, 20, 30, 40), 0.5, 0.0);
        assert_eq!(c.a, 40);
    }

    // -- length / intensity --

    #[test]
    fn color_length_is_euclidean() {
        let len = color_length(Color::rgb(3, 4, 0));
        assert!((len - 5.0).abs() < 1e-12);
    }

    #[test]
    fn greyscale_intensity_averages_channels() {
        assert_eq!(greyscale_intensity(Color::rgb(30, 60, 90)), 60);
        assert_eq!(greyscale_intensity(Color::WHITE), 255);
        assert_eq!(greyscale_intensity(Color::BLACK), 0);
    }

    #[test]
    fn colors_are_close_uses_per_channel_spread() {
        let a = Color::rgb(100, 100, 100);
        let b = Color::rgb(105, 90, 100);
        assert!(colors_are_close(a, b, Vector3::new(5.0, 10.0, 0.0)));
        assert!(!colors_are_close(a, b, Vector3::new(4.0, 10.0, 0.0)));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = Color> {
            any::<[u8; 4]>().prop_map(|[r, g, b, a]| Color::rgba(r, g, b, a))
        }

        proptest! {
            #[test]
            fn gamma_identity_exponent_returns_input(c in any_color()) {
                prop_assert_eq!(gamma(c, 1.0, 0.0), c);
            }

            #[test]
            fn color_scale_reference_pair_is_identity(c in any_color()) {
                prop_assert_eq!(color_scale(c, 128.0, 64.0), c);
            }

            #[test]
            fn color_scale_is_monotonic(
                lo in any::<u8>(),
                hi in any::<u8>(),
                mean in 0.0_f64..=255.0,
                std in 0.1_f64..=128.0,
            ) {
                prop_assume!(lo <= hi);
                let a = color_scale(Color::rgb(lo, lo, lo), mean, std);
                let b = color_scale(Color::rgb(hi, hi, hi), mean, std);
                prop_assert!(a.r <= b.r, "{} -> {} but {} -> {}", lo, a.r, hi, b.r);
            }

            #[test]
            fn color_scale2_is_monotonic(
                lo in any::<u8>(),
                hi in any::<u8>(),
                x0 in 0.0_f64..128.0,
                x1 in 128.0_f64..=255.0,
            ) {
                prop_assume!(lo <= hi);
                let a = color_scale2(Color::rgb(lo, 0, 0), x0, x1);
                let b = color_scale2(Color::rgb(hi, 0, 0), x0, x1);
                prop_assert!(a.r <= b.r);
            }

            #[test]
            fn greyscale_lies_between_min_and_max_channel(c in any_color()) {
                let g = greyscale_intensity(c);
                prop_assert!(g >= c.r.min(c.g).min(c.b));
                prop_assert!(g <= c.r.max(c.g).max(c.b));
            }

            #[test]
            fn hex_round_trip_is_exact(c in any_color()) {
                prop_assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
            }
        }
    }
}
