//! Default criteria per usage category.

/// Usage categories with their own default criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Office,
    Gaming,
    Mobility,
}

impl Usage {
    /// Parses a usage key, falling back to office for anything unknown.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "gaming" => Self::Gaming,
            "mobility" => Self::Mobility,
            _ => Self::Office,
        }
    }

    /// Default criteria, in presentation order.
    pub fn criteria(&self) -> &'static [&'static str] {
        match self {
            Self::Office => &[
                "Performance",
                "Price",
                "Display",
                "Battery",
                "Design",
                "Durability",
            ],
            Self::Gaming => &[
                "Performance",
                "Graphics",
                "Display",
                "Cooling",
                "Price",
                "Durability",
            ],
            Self::Mobility => &[
                "Battery",
                "Weight",
                "Performance",
                "Price",
                "Display",
                "Durability",
            ],
        }
    }
}

/// Shorthand for `Usage::from_key(key).criteria()`.
pub fn criteria_for_usage(key: &str) -> &'static [&'static str] {
    Usage::from_key(key).criteria()
}
