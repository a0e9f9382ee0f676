//! Color mapping functions for map visualization.

use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// CSS hex notation, e.g. `#ff0000`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Color palette for heatmap cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Full hue wheel, `hsl(fraction * 360, 100%, 50%)`, as the web map draws it.
    #[default]
    Hue,
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Hue => Self::Viridis,
            Self::Viridis => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Hue,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hue => "Hue",
            Self::Viridis => "Viridis",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Map a color fraction (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Hue => hue_color(hue_degrees(t)),
            Self::Viridis => viridis_color(t),
            Self::Rainbow => hue_color((1.0 - t) * 240.0),
            Self::BlueRed => bluered_color(t),
        }
    }
}

/// Hue angle the web map assigns to a color fraction.
pub fn hue_degrees(fraction: f64) -> f64 {
    fraction * 360.0
}

/// Fully saturated color at hue `h` degrees.
fn hue_color(h: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = 1.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Rgb {
    // Piecewise linear through the two ends and the midpoint.
    let lerp = |lo: f64, mid: f64, hi: f64| {
        if t < 0.5 {
            lo + t * 2.0 * (mid - lo)
        } else {
            mid + (t - 0.5) * 2.0 * (hi - mid)
        }
    };

    Rgb {
        r: lerp(68.0, 33.0, 253.0) as u8,
        g: lerp(1.0, 104.0, 231.0) as u8,
        b: lerp(84.0, 109.0, 37.0) as u8,
    }
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Rgb {
    if t < 0.5 {
        // Blue to white
        let v = (t * 2.0 * 255.0) as u8;
        Rgb { r: v, g: v, b: 255 }
    } else {
        // White to red
        let v = ((1.0 - (t - 0.5) * 2.0) * 255.0) as u8;
        Rgb { r: 255, g: v, b: v }
    }
}
