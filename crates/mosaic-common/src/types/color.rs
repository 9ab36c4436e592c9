use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 | 4 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                let a = if hex.len() == 4 { short(3)? } else { 255 };
                Some(Self::from_rgba(short(0)?, short(1)?, short(2)?, a))
            }
            6 => Some(Self::from_rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Some(Self::from_rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Parse any color form the config accepts: hex, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)` with alpha in `0..=1`. Channels are clamped.
    pub fn from_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }
        let (inner, arity) = if let Some(rest) = value.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = value.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return None;
        };
        let parts = inner
            .strip_suffix(')')?
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;
        if parts.len() != arity {
            return None;
        }
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        let a = parts.get(3).map_or(255, |alpha| byte(alpha * 255.0));
        Some(Self::from_rgba(byte(parts[0]), byte(parts[1]), byte(parts[2]), a))
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Tuple form accepted by `wry::WebViewBuilder::with_background_color`.
    pub fn to_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}
