//! The item record and its identifiers.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Identifier of the catalog product an item instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique serial number of a physical item. Acts as the item's natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the serial number is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for SerialNumber {
    fn from(serial: &str) -> Self {
        Self::new(serial)
    }
}

impl From<String> for SerialNumber {
    fn from(serial: String) -> Self {
        Self(serial)
    }
}

impl Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an item is currently available for use or sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Operational,
    #[default]
    NonOperational,
}

impl ItemStatus {
    /// `true` maps to `Operational`, `false` to `NonOperational`.
    pub fn from_operational(operational: bool) -> Self {
        if operational {
            Self::Operational
        } else {
            Self::NonOperational
        }
    }

    pub fn is_operational(self) -> bool {
        self == Self::Operational
    }
}

/// Represents one physical, serialized unit of a catalog product.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Item`](#impl-ActorEntity-for-Item) for details on:
/// - The natural key ([`SerialNumber`])
/// - Update parameters ([`ItemUpdate`])
/// - List filters ([`ItemFilter`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub product_id: ProductId,
    pub serial_number: SerialNumber,
    pub status: ItemStatus,
}

impl Item {
    /// Creates a new, not yet operational item.
    ///
    /// # Arguments
    /// * `product_id` - The product this item is a unit of
    /// * `serial_number` - Unique serial number, immutable once stored
    pub fn new(product_id: ProductId, serial_number: impl Into<SerialNumber>) -> Self {
        Self {
            product_id,
            serial_number: serial_number.into(),
            status: ItemStatus::default(),
        }
    }
}

/// DTO for Item updates. Product and serial number are immutable, so only the status moves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub status: Option<ItemStatus>,
}

/// Selection criteria for listing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilter {
    ProductId(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_not_operational() {
        let item = Item::new(ProductId(10), "SN1");
        assert_eq!(item.status, ItemStatus::NonOperational);
        assert_eq!(item.serial_number.as_str(), "SN1");
    }

    #[test]
    fn test_status_from_flag() {
        assert_eq!(ItemStatus::from_operational(true), ItemStatus::Operational);
        assert_eq!(ItemStatus::from_operational(false), ItemStatus::NonOperational);
        assert!(ItemStatus::Operational.is_operational());
    }

    #[test]
    fn test_blank_serial_numbers() {
        assert!(SerialNumber::new("").is_blank());
        assert!(SerialNumber::new("  \t").is_blank());
        assert!(!SerialNumber::new("SN-7").is_blank());
    }
}
