use egui::Color32;
use egui::ecolor::{hsv_from_rgb, rgb_from_hsv};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Degrees the cursor hue advances for every appended segment
pub const HUE_DRIFT_DEGREES: f32 = 0.3;

/// Saturation and brightness used for the cursor swatch preview
const SWATCH_SATURATION: f32 = 0.8;
const SWATCH_BRIGHTNESS: f32 = 0.9;

/// Vibrant colors `ColorCursor::reroll` may pick from
pub const VIBRANT_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x00, 0xBC, 0xD4), // cyan
    Color32::from_rgb(0xE9, 0x1E, 0x63), // pink
    Color32::from_rgb(0x4C, 0xAF, 0x50), // green
    Color32::from_rgb(0xFF, 0x98, 0x00), // orange
    Color32::from_rgb(0x67, 0x3A, 0xB7), // deep purple
    Color32::from_rgb(0x21, 0x96, 0xF3), // blue
    Color32::from_rgb(0xFF, 0xEB, 0x3B), // yellow
    Color32::from_rgb(0xFF, 0x57, 0x22), // deep orange
];

/// Background shown before the first clear
pub const INITIAL_BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);

/// Live color state used to resolve the color of the next segment.
///
/// Hue is kept in degrees in `[0, 360)`, the other channels in `[0, 1]`.
/// HSV values are interpreted in sRGB space, so `resolve` produces the
/// same bytes a typical `hsv(h, s, v)` color picker would.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCursor {
    hue: f32,
    saturation: f32,
    brightness: f32,
    alpha: f32,
}

impl Default for ColorCursor {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.8,
            brightness: 0.9,
            alpha: 0.8,
        }
    }
}

impl ColorCursor {
    pub fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            brightness: brightness.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Freeze the cursor into a concrete color for a new segment
    pub fn resolve(&self) -> Color32 {
        hsv_to_color32(self.hue, self.saturation, self.brightness, self.alpha)
    }

    /// Opaque preview of the current hue, as shown on the color button
    pub fn swatch(&self) -> Color32 {
        hsv_to_color32(self.hue, SWATCH_SATURATION, SWATCH_BRIGHTNESS, 1.0)
    }

    /// Advance the hue by `HUE_DRIFT_DEGREES`, wrapping at 360.
    pub fn drift(&mut self) {
        self.hue = wrap_hue(self.hue + HUE_DRIFT_DEGREES);
    }

    /// Pick a fresh hue, saturation and brightness. Alpha is kept.
    ///
    /// Half of the time a palette color is decomposed into HSV, otherwise
    /// the channels are sampled from a vibrant range.
    pub fn reroll(&mut self, rng: &mut impl Rng) {
        let palette_pick = if rng.random_bool(0.5) {
            VIBRANT_PALETTE.choose(rng).copied()
        } else {
            None
        };

        match palette_pick {
            Some(color) => {
                let (h, s, v) = hsv_from_rgb([
                    color.r() as f32 / 255.0,
                    color.g() as f32 / 255.0,
                    color.b() as f32 / 255.0,
                ]);
                self.hue = wrap_hue(h * 360.0);
                self.saturation = s;
                self.brightness = v;
            }
            None => {
                self.hue = rng.random_range(0.0..360.0);
                self.saturation = rng.random_range(0.7..1.0);
                self.brightness = rng.random_range(0.8..1.0);
            }
        }
    }
}

/// Dark, desaturated background so vibrant strokes stay legible
pub fn random_background(rng: &mut impl Rng) -> Color32 {
    Color32::from_rgb(
        rng.random_range(5..30),
        rng.random_range(5..30),
        rng.random_range(20..45),
    )
}

fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn hsv_to_color32(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Color32 {
    let [r, g, b] = rgb_from_hsv((hue / 360.0, saturation, brightness));
    Color32::from_rgba_unmultiplied(to_byte(r), to_byte(g), to_byte(b), to_byte(alpha))
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_drift_wraps_at_360() {
        let mut cursor = ColorCursor::new(359.9, 1.0, 1.0, 1.0);
        cursor.drift();
        assert!(cursor.hue() < 1.0);
        assert!((cursor.hue() - 0.2).abs() < 1e-3);
    }

    #[test]
    fn test_drift_leaves_other_channels() {
        let mut cursor = ColorCursor::new(10.0, 0.5, 0.6, 0.7);
        cursor.drift();
        assert_eq!(cursor.saturation(), 0.5);
        assert_eq!(cursor.brightness(), 0.6);
        assert_eq!(cursor.alpha(), 0.7);
    }

    #[test]
    fn test_resolve_primary_hues() {
        let red = ColorCursor::new(0.0, 1.0, 1.0, 1.0).resolve();
        assert_eq!(red, Color32::from_rgb(255, 0, 0));

        let green = ColorCursor::new(120.0, 1.0, 1.0, 1.0).resolve();
        assert_eq!(green, Color32::from_rgb(0, 255, 0));

        let blue = ColorCursor::new(240.0, 1.0, 1.0, 1.0).resolve();
        assert_eq!(blue, Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_resolve_carries_alpha() {
        let color = ColorCursor::new(0.0, 1.0, 1.0, 0.8).resolve();
        assert_eq!(color.to_srgba_unmultiplied()[3], 204);
    }

    #[test]
    fn test_reroll_stays_vibrant_and_keeps_alpha() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cursor = ColorCursor::default();
        for _ in 0..200 {
            cursor.reroll(&mut rng);
            assert!((0.0..360.0).contains(&cursor.hue()));
            // Palette green sits at roughly s=0.57, v=0.69
            assert!(cursor.saturation() >= 0.5 && cursor.saturation() <= 1.0);
            assert!(cursor.brightness() >= 0.6 && cursor.brightness() <= 1.0);
            assert_eq!(cursor.alpha(), 0.8);
        }
    }

    #[test]
    fn test_palette_colors_round_trip_through_cursor() {
        for color in VIBRANT_PALETTE {
            let (h, s, v) = hsv_from_rgb([
                color.r() as f32 / 255.0,
                color.g() as f32 / 255.0,
                color.b() as f32 / 255.0,
            ]);
            let cursor = ColorCursor::new(h * 360.0, s, v, 1.0);
            let resolved = cursor.resolve();
            assert!((resolved.r() as i32 - color.r() as i32).abs() <= 1);
            assert!((resolved.g() as i32 - color.g() as i32).abs() <= 1);
            assert!((resolved.b() as i32 - color.b() as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_background_is_dark() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let bg = random_background(&mut rng);
            assert!((5..=30).contains(&bg.r()));
            assert!((5..=30).contains(&bg.g()));
            assert!((20..=45).contains(&bg.b()));
            assert_eq!(bg.a(), 255);
        }
    }

    #[test]
    fn test_new_sanitizes_hue() {
        assert_eq!(ColorCursor::new(f32::NAN, 1.0, 1.0, 1.0).hue(), 0.0);
        assert!((ColorCursor::new(-30.0, 1.0, 1.0, 1.0).hue() - 330.0).abs() < 1e-3);
    }
}
