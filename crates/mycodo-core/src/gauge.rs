//! Gauge color stops
//!
//! A gauge is colored by contiguous bands. Bands are stored as the compact
//! `"low,high,#RRGGBB;low,high,#RRGGBB"` string used by Mycodo widget
//! options, so the same option value can be shared with the web dashboard.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Bands used when a gauge is created without explicit colors
pub const DEFAULT_RANGE_COLORS: &str = "0,20,#33CCFF;20,40,#55BF3B;40,60,#DDDF0D;60,80,#DF5353";

/// Colors assigned, in order, to evenly generated bands
pub const STOP_PALETTE: [&str; 4] = ["#33CCFF", "#55BF3B", "#DDDF0D", "#DF5353"];

/// Color for bands beyond the palette
pub const OVERFLOW_COLOR: &str = "#DF5353";

/// Width of each band appended by [`reformat_stops`]
const APPENDED_BAND_WIDTH: f64 = 20.0;

/// A gauge needs at least two bands to read as a scale
const MIN_STOPS: usize = 2;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[a-fA-F0-9]{6}$").expect("Invalid hex color regex"));

/// Check if a string is a `#RRGGBB` color
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// One colored band of a gauge
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub low: f64,
    pub high: f64,
    pub hex: String,
}

impl ColorStop {
    pub fn new(low: f64, high: f64, hex: impl Into<String>) -> Self {
        Self {
            low,
            high,
            hex: hex.into(),
        }
    }

    /// Whether `value` falls inside this band (inclusive on both ends)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Decode the hex color into RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        if !is_hex_color(&self.hex) {
            return None;
        }
        let r = u8::from_str_radix(&self.hex[1..3], 16).ok()?;
        let g = u8::from_str_radix(&self.hex[3..5], 16).ok()?;
        let b = u8::from_str_radix(&self.hex[5..7], 16).ok()?;
        Some((r, g, b))
    }
}

/// Parse `"low,high,#hex;..."` into bands.
///
/// An empty string yields no bands. Every band must have three fields, numeric
/// bounds and a valid hex color.
pub fn parse_range_colors(value: &str) -> Result<Vec<ColorStop>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(';')
        .enumerate()
        .map(|(index, band)| {
            let fields: Vec<&str> = band.split(',').map(str::trim).collect();
            let [low, high, hex] = fields.as_slice() else {
                return Err(Error::gauge_colors(format!(
                    "band {index} needs low,high,color but was {band:?}"
                )));
            };
            let low: f64 = low
                .parse()
                .map_err(|_| Error::gauge_colors(format!("band {index} low {low:?}")))?;
            let high: f64 = high
                .parse()
                .map_err(|_| Error::gauge_colors(format!("band {index} high {high:?}")))?;
            if !is_hex_color(hex) {
                return Err(Error::gauge_colors(format!(
                    "band {index} color {hex:?} is not #RRGGBB"
                )));
            }
            Ok(ColorStop::new(low, high, *hex))
        })
        .collect()
}

/// Serialize bands back into the compact option string
pub fn format_range_colors(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| format!("{},{},{}", format_bound(s.low), format_bound(s.high), s.hex))
        .collect::<Vec<_>>()
        .join(";")
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// The default four bands
pub fn default_stops() -> Vec<ColorStop> {
    // DEFAULT_RANGE_COLORS is a constant known to parse.
    parse_range_colors(DEFAULT_RANGE_COLORS).unwrap_or_default()
}

/// Resize a band list after the configured stop count changed.
///
/// Growing appends 20-wide bands in [`OVERFLOW_COLOR`], numbered upward from
/// 80 (the top of the default scale). Shrinking drops bands from the end.
/// With no `current` bands the defaults are the starting point.
pub fn reformat_stops(
    current_stops: usize,
    new_stops: usize,
    current: Option<&[ColorStop]>,
) -> Vec<ColorStop> {
    let mut stops = match current {
        Some(bands) if !bands.is_empty() => bands.to_vec(),
        _ => default_stops(),
    };

    if new_stops > current_stops {
        let mut top = 80.0;
        for _ in 0..(new_stops - current_stops) {
            top += APPENDED_BAND_WIDTH;
            stops.push(ColorStop::new(
                top - APPENDED_BAND_WIDTH,
                top,
                OVERFLOW_COLOR,
            ));
        }
    } else if new_stops < current_stops {
        let keep = stops.len().saturating_sub(current_stops - new_stops);
        stops.truncate(keep);
    }

    stops
}

/// Gauge description handed to a panel body
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    /// Caption, usually the measurement name
    pub label: String,
    /// Measurement unit shown after the value
    pub unit: String,
    pub min: f64,
    pub max: f64,
    /// Latest value; `None` until a measurement arrives or when it is stale
    pub value: Option<f64>,
    pub stops: Vec<ColorStop>,
}

impl GaugeSpec {
    /// Gauge over `[min, max]` colored with the default bands
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            unit: String::new(),
            min,
            max,
            value: None,
            stops: default_stops(),
        }
    }

    /// Gauge over `[min, max]` with `stops` evenly sized bands.
    ///
    /// Band width is the integer part of `(max - min) / stops`; fewer than two
    /// stops are raised to two.
    pub fn with_even_stops(label: impl Into<String>, min: f64, max: f64, stops: usize) -> Self {
        let stops = stops.max(MIN_STOPS);
        let difference = (max - min).trunc();
        let band = (difference / stops as f64).trunc();

        let mut bands = Vec::with_capacity(stops);
        let mut low = min;
        for index in 0..stops {
            let hex = STOP_PALETTE.get(index).copied().unwrap_or(OVERFLOW_COLOR);
            bands.push(ColorStop::new(low, low + band, hex));
            low += band;
        }

        Self {
            label: label.into(),
            unit: String::new(),
            min,
            max,
            value: None,
            stops: bands,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the latest value. NaN and infinities count as no value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value.is_finite().then_some(value);
        self
    }

    /// Replace the bands with a `"low,high,#hex;..."` option string
    pub fn with_range_colors(mut self, range_colors: &str) -> Result<Self> {
        self.stops = parse_range_colors(range_colors)?;
        tracing::trace!(
            "Gauge {} bands: {}",
            self.label,
            format_range_colors(&self.stops)
        );
        Ok(self)
    }

    /// Resize the bands to `count`, see [`reformat_stops`]
    pub fn with_stop_count(mut self, count: usize) -> Self {
        self.stops = reformat_stops(self.stops.len(), count, Some(&self.stops));
        self
    }

    /// Fill ratio in `[0, 1]`.
    ///
    /// Zero when there is no value, or when the range is empty or not finite.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        let Some(value) = self.value else {
            return 0.0;
        };
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }

        let ratio = (value - self.min) / span;
        if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }

    /// Band the current value falls in
    pub fn active_stop(&self) -> Option<&ColorStop> {
        let value = self.value?;
        self.stops.iter().find(|s| s.contains(value))
    }
}
