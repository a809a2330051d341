//! Measurable product attributes used by the heuristic.

use serde::{Deserialize, Serialize};

use crate::domain::comparison::Item;

/// Catalog attributes of one product.
///
/// Text fields are free-form catalog strings ("16GB DDR5", "15.6 inch",
/// "QHD OLED 120Hz"); the scorer extracts what it needs from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecs {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub ram: Option<String>,
    #[serde(default)]
    pub screen: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub battery: Option<String>,
    /// Mass in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ProductSpecs {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn with_ram(mut self, ram: impl Into<String>) -> Self {
        self.ram = Some(ram.into());
        self
    }

    pub fn with_screen(mut self, size: impl Into<String>, name: impl Into<String>) -> Self {
        self.screen = Some(size.into());
        self.screen_name = Some(name.into());
        self
    }

    pub fn with_battery(mut self, battery: impl Into<String>) -> Self {
        self.battery = Some(battery.into());
        self
    }

    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    /// The comparison item for this product.
    pub fn to_item(&self) -> Item {
        Item::new(self.id.clone(), self.name.clone())
    }
}
