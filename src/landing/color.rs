use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid color: {0}")]
    Invalid(String),
    #[error("Palette needs at least one color")]
    EmptyPalette,
}

/// An sRGB color with straight alpha, interpolated per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }

    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }
        let invalid = || ColorError::Invalid(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let short = |i: usize| channel(&hex[i..i + 1].repeat(2));
        match hex.len() {
            3 => Ok(Self::rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => {
                let mut c = Self::rgb(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                );
                c.a = channel(&hex[6..8])? as f64 / 255.0;
                Ok(c)
            }
            _ => Err(invalid()),
        }
    }

    pub fn lerp(&self, to: &Rgba, t: f64) -> Rgba {
        Rgba {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
            a: self.a + (to.a - self.a) * t,
        }
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            c(self.r),
            c(self.g),
            c(self.b),
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }
}

/// Non-empty list of colors that decorative elements draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<Rgba>);

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, ColorError> {
        let colors = colors
            .iter()
            .map(|s| Rgba::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.0
    }

    pub fn contains(&self, color: &Rgba) -> bool {
        self.0.contains(color)
    }
}

pub const COSMIC_COLORS: [&str; 9] = [
    "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#00bcd4", "#4caf50", "#ffeb3b", "#ff9800",
    "#ff5722",
];

impl Default for Palette {
    fn default() -> Self {
        Self(
            COSMIC_COLORS
                .iter()
                .filter_map(|s| Rgba::parse(s).ok())
                .collect(),
        )
    }
}
