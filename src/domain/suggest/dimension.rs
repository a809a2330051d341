//! Attribute dimensions and their raw scoring formulas.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::{ProductSpecs, SuggestError};

static GENERATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4,5}").expect("generation pattern is valid"));
static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("integer pattern is valid"));
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?").expect("decimal pattern is valid"));
static LEADING_DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+(\.\d+)?").expect("leading decimal pattern is valid"));

const DEFAULT_RAM_GB: f64 = 8.0;
const DEFAULT_SCREEN_INCHES: f64 = 14.0;
const PRICE_SCORE_SCALE: f64 = 2_000_000_000.0;

/// A product attribute the heuristic knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Performance,
    Price,
    Display,
    Battery,
    /// Portability; lighter scores higher.
    Design,
    Durability,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Performance,
        Dimension::Price,
        Dimension::Display,
        Dimension::Battery,
        Dimension::Design,
        Dimension::Durability,
    ];

    /// Raw, unitless score of one product on this dimension. Higher is better.
    pub fn score(&self, specs: &ProductSpecs) -> f64 {
        match self {
            Self::Performance => performance_score(specs),
            Self::Price => match specs.price {
                Some(price) if price != 0.0 => PRICE_SCORE_SCALE / price,
                _ => 1.0,
            },
            Self::Display => display_score(specs),
            Self::Battery => first_decimal(specs.battery.as_deref()).unwrap_or(0.0) / 1000.0,
            Self::Design => match specs.weight {
                Some(kg) if kg != 0.0 => 3.0 / kg,
                _ => 1.0,
            },
            Self::Durability => durability_score(&specs.name),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Performance => "Performance",
            Self::Price => "Price",
            Self::Display => "Display",
            Self::Battery => "Battery",
            Self::Design => "Design",
            Self::Durability => "Durability",
        };
        f.write_str(s)
    }
}

impl FromStr for Dimension {
    type Err = SuggestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "performance" => Ok(Self::Performance),
            "price" => Ok(Self::Price),
            "display" | "screen" => Ok(Self::Display),
            "battery" => Ok(Self::Battery),
            "design" | "weight" => Ok(Self::Design),
            "durability" => Ok(Self::Durability),
            _ => Err(SuggestError::UnsupportedDimension(s.to_string())),
        }
    }
}

/// CPU tier lookup plus two points per generation digit.
pub fn cpu_score(cpu: Option<&str>) -> f64 {
    let Some(cpu) = cpu else {
        return 50.0;
    };
    let tier = if cpu.contains("Ryzen 9") || cpu.contains("i9") {
        95.0
    } else if cpu.contains("Ryzen 7") || cpu.contains("i7") {
        85.0
    } else if cpu.contains("Ryzen 5") || cpu.contains("i5") {
        70.0
    } else if cpu.contains("Ryzen 3") || cpu.contains("i3") {
        55.0
    } else {
        50.0
    };
    // Generation is the leading digit of the first 4-5 digit model number.
    let generation = GENERATION_RE
        .find(cpu)
        .and_then(|m| m.as_str().chars().next())
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0);
    tier + f64::from(generation) * 2.0
}

fn performance_score(specs: &ProductSpecs) -> f64 {
    let ram = specs.ram.as_deref();
    let ram_gb = ram
        .and_then(|r| INTEGER_RE.find(r))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_RAM_GB);
    let ddr5 = if ram.is_some_and(|r| r.to_lowercase().contains("ddr5")) {
        1.2
    } else {
        1.0
    };
    cpu_score(specs.cpu.as_deref()) * 0.6 + ram_gb * ddr5 * 3.0
}

fn display_score(specs: &ProductSpecs) -> f64 {
    let size = specs
        .screen
        .as_deref()
        .and_then(|s| LEADING_DECIMAL_RE.find(s))
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|size| *size != 0.0)
        .unwrap_or(DEFAULT_SCREEN_INCHES);
    let panel = specs.screen_name.as_deref().unwrap_or("").to_lowercase();
    let resolution = if panel.contains("4k") {
        3.0
    } else if panel.contains("2k") || panel.contains("qhd") {
        2.0
    } else if panel.contains("fhd") {
        1.5
    } else {
        1.0
    };
    let oled = if panel.contains("oled") { 1.5 } else { 1.0 };
    size * resolution * oled
}

fn durability_score(name: &str) -> f64 {
    let name = name.to_lowercase();
    if name.contains("thinkpad") || name.contains("dell") {
        9.0
    } else if name.contains("hp") || name.contains("lenovo") {
        7.0
    } else if name.contains("asus") {
        6.0
    } else if name.contains("acer") {
        5.0
    } else {
        4.0
    }
}

fn first_decimal(text: Option<&str>) -> Option<f64> {
    text.and_then(|t| DECIMAL_RE.find(t))
        .and_then(|m| m.as_str().parse().ok())
}
