//! Settings category keys and display metadata.
//!
//! # Design
//! - Categories form a closed, hand-maintained set; adding one means adding a
//!   variant plus one descriptor arm.
//! - Lookup by key is total: unrecognised input resolves to a generic
//!   descriptor instead of an error so navigation never dead-ends.

use serde::{Deserialize, Serialize};

/// Top-level settings grouping shown in the settings navigation pane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SettingsCategory {
    /// Business identity and storefront preferences.
    General,
    /// Point-of-sale behaviour (cash drawer, tables, shifts, tax).
    Pos,
    /// Stock tracking and reorder policies.
    Inventory,
    /// Customer accounts and loyalty options.
    Customers,
    /// Tender types, discounts and surcharges.
    Payments,
    /// Receipt and kitchen printer assignments.
    Printers,
    /// Alerts and operator notifications.
    Notifications,
    /// Sessions, PINs and access control.
    Security,
    /// Third-party service connections.
    Integrations,
    /// Maintenance and diagnostic options.
    System,
}

impl SettingsCategory {
    /// Every category in navigation display order.
    pub const ALL: [Self; 10] = [
        Self::General,
        Self::Pos,
        Self::Inventory,
        Self::Customers,
        Self::Payments,
        Self::Printers,
        Self::Notifications,
        Self::Security,
        Self::Integrations,
        Self::System,
    ];

    /// Canonical lowercase key used for dispatch and wire routing.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Pos => "pos",
            Self::Inventory => "inventory",
            Self::Customers => "customers",
            Self::Payments => "payments",
            Self::Printers => "printers",
            Self::Notifications => "notifications",
            Self::Security => "security",
            Self::Integrations => "integrations",
            Self::System => "system",
        }
    }

    /// Parse a category key, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_key().eq_ignore_ascii_case(key))
    }
}

/// Display metadata for a settings category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    /// Title shown in the settings host header.
    pub title: &'static str,
    /// One-line description shown under the title.
    pub description: &'static str,
}

/// Fallback descriptor for unrecognised category keys.
const FALLBACK: CategoryDescriptor = CategoryDescriptor {
    title: "Settings",
    description: "Configure system settings",
};

/// Resolve the display descriptor for a category key.
///
/// Total over arbitrary input: known keys (case-insensitive) return their
/// dedicated pair, everything else the generic fallback.
#[must_use]
pub fn describe(key: &str) -> CategoryDescriptor {
    SettingsCategory::parse(key).map_or(FALLBACK, |category| match category {
        SettingsCategory::General => CategoryDescriptor {
            title: "General",
            description: "Business identity and storefront preferences",
        },
        SettingsCategory::Pos => CategoryDescriptor {
            title: "Point of Sale",
            description: "Cash drawer, tables, shifts and tax behaviour",
        },
        SettingsCategory::Inventory => CategoryDescriptor {
            title: "Inventory",
            description: "Stock tracking and reorder policies",
        },
        SettingsCategory::Customers => CategoryDescriptor {
            title: "Customers",
            description: "Customer accounts and loyalty options",
        },
        SettingsCategory::Payments => CategoryDescriptor {
            title: "Payments",
            description: "Tender types, discounts and surcharges",
        },
        SettingsCategory::Printers => CategoryDescriptor {
            title: "Printers",
            description: "Receipt and kitchen printer assignments",
        },
        SettingsCategory::Notifications => CategoryDescriptor {
            title: "Notifications",
            description: "Alerts and operator notifications",
        },
        SettingsCategory::Security => CategoryDescriptor {
            title: "Security",
            description: "Sessions, PINs and access control",
        },
        SettingsCategory::Integrations => CategoryDescriptor {
            title: "Integrations",
            description: "Third-party service connections",
        },
        SettingsCategory::System => CategoryDescriptor {
            title: "System",
            description: "Maintenance and diagnostic options",
        },
    })
}

/// Split a dotted sub-category key into its category segment and remainder.
///
/// Only the first segment participates in dispatch; the remainder is handed
/// to the selected sub-page verbatim. An empty remainder collapses to `None`.
#[must_use]
pub fn split_sub_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('.') {
        Some((category, rest)) if !rest.is_empty() => (category, Some(rest)),
        Some((category, _)) => (category, None),
        None => (key, None),
    }
}
