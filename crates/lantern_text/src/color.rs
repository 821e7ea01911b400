//! [`Color`] and related data structures.

use std::fmt;
use std::str::FromStr;

use serde::de::Visitor;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The color of a piece of text.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum Color {
    /// Use the color of the surrounding context.
    #[default]
    Reset,
    /// A `#rrggbb` color. Only understood by clients on 1.16 and later.
    Rgb(RgbColor),
    /// One of the 16 colors every client knows about.
    Named(NamedColor),
}

/// A 24-bit color.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The named colors, in legacy format code order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NamedColor {
    Black = 0,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Returned when a color name or hex code can't be parsed.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("invalid color name or hex code \"{0}\"")]
pub struct ColorError(pub String);

impl Color {
    pub const BLACK: Self = Self::Named(NamedColor::Black);
    pub const DARK_BLUE: Self = Self::Named(NamedColor::DarkBlue);
    pub const DARK_GREEN: Self = Self::Named(NamedColor::DarkGreen);
    pub const DARK_AQUA: Self = Self::Named(NamedColor::DarkAqua);
    pub const DARK_RED: Self = Self::Named(NamedColor::DarkRed);
    pub const DARK_PURPLE: Self = Self::Named(NamedColor::DarkPurple);
    pub const GOLD: Self = Self::Named(NamedColor::Gold);
    pub const GRAY: Self = Self::Named(NamedColor::Gray);
    pub const DARK_GRAY: Self = Self::Named(NamedColor::DarkGray);
    pub const BLUE: Self = Self::Named(NamedColor::Blue);
    pub const GREEN: Self = Self::Named(NamedColor::Green);
    pub const AQUA: Self = Self::Named(NamedColor::Aqua);
    pub const RED: Self = Self::Named(NamedColor::Red);
    pub const LIGHT_PURPLE: Self = Self::Named(NamedColor::LightPurple);
    pub const YELLOW: Self = Self::Named(NamedColor::Yellow);
    pub const WHITE: Self = Self::Named(NamedColor::White);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(RgbColor { r, g, b })
    }

    /// The legacy format code for this color, or `None` for [`Color::Reset`].
    /// RGB colors use the code of the closest named color.
    pub fn legacy_code(self) -> Option<char> {
        match self {
            Color::Reset => None,
            Color::Rgb(rgb) => Some(rgb.to_named_lossy().code()),
            Color::Named(named) => Some(named.code()),
        }
    }
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Finds the named color at the smallest euclidean distance.
    pub fn to_named_lossy(self) -> NamedColor {
        let dist = |named: NamedColor| {
            let other = named.rgb();
            let dr = i32::from(self.r) - i32::from(other.r);
            let dg = i32::from(self.g) - i32::from(other.g);
            let db = i32::from(self.b) - i32::from(other.b);
            dr * dr + dg * dg + db * db
        };

        let mut best = NamedColor::Black;
        for named in NamedColor::ALL {
            if dist(named) < dist(best) {
                best = named;
            }
        }
        best
    }
}

impl NamedColor {
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// The hex digit following `§` in legacy formatting.
    pub const fn code(self) -> char {
        b"0123456789abcdef"[self as usize] as char
    }

    /// The name used in JSON text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    pub const fn rgb(self) -> RgbColor {
        match self {
            Self::Black => RgbColor::new(0, 0, 0),
            Self::DarkBlue => RgbColor::new(0, 0, 170),
            Self::DarkGreen => RgbColor::new(0, 170, 0),
            Self::DarkAqua => RgbColor::new(0, 170, 170),
            Self::DarkRed => RgbColor::new(170, 0, 0),
            Self::DarkPurple => RgbColor::new(170, 0, 170),
            Self::Gold => RgbColor::new(255, 170, 0),
            Self::Gray => RgbColor::new(170, 170, 170),
            Self::DarkGray => RgbColor::new(85, 85, 85),
            Self::Blue => RgbColor::new(85, 85, 255),
            Self::Green => RgbColor::new(85, 255, 85),
            Self::Aqua => RgbColor::new(85, 255, 255),
            Self::Red => RgbColor::new(255, 85, 85),
            Self::LightPurple => RgbColor::new(255, 85, 255),
            Self::Yellow => RgbColor::new(255, 255, 85),
            Self::White => RgbColor::new(255, 255, 255),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        Self::Named(value)
    }
}

impl From<RgbColor> for Color {
    fn from(value: RgbColor) -> Self {
        Self::Rgb(value)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "reset" {
            return Ok(Self::Reset);
        }

        if s.starts_with('#') {
            return s.parse().map(Self::Rgb);
        }

        s.parse().map(Self::Named)
    }
}

impl FromStr for NamedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|named| named.name() == s)
            .ok_or_else(|| ColorError(s.to_owned()))
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorError(s.to_owned());

        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let rgb = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        let [_, r, g, b] = rgb.to_be_bytes();

        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Reset => f.write_str("reset"),
            Color::Rgb(rgb) => rgb.fmt(f),
            Color::Named(named) => named.fmt(f),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a color name, a hex color (#rrggbb) or \"reset\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}
