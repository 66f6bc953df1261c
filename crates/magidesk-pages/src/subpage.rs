//! The sub-page contract and category resolution table.

use magidesk_settings::{SettingsCategory, SettingsPayload, split_sub_key};

use crate::pages::{
    BaseSettingsPage, GeneralSettingsPage, InventorySettingsPage, PaymentsSettingsPage,
    PosSettingsPage, SecuritySettingsPage,
};

/// Contract every settings sub-page implements so the host can drive any
/// category uniformly.
///
/// Load and collect are both full-structure passes: a load repaints every
/// bound control from the document, a collect overwrites every surfaced
/// field from its control. There is no diffing or change tracking.
pub trait SettingsSubPage: Send {
    /// Canonical key of the category this page is bound to.
    fn category_key(&self) -> &str;

    /// Record which sub-section was selected in navigation.
    ///
    /// Pages are free to ignore the hint; it never fails.
    fn set_sub_category(&mut self, sub_key: &str);

    /// Push a freshly loaded settings document into the page.
    ///
    /// A payload for a different category leaves the page untouched; the
    /// mismatch is logged and otherwise ignored.
    fn set_settings(&mut self, payload: &SettingsPayload);

    /// Collect the current control values into a settings document.
    ///
    /// Returns a new value; the page's own copy is only replaced by the next
    /// [`Self::set_settings`]. Fields without a bound control pass through
    /// from the last loaded document. Before any load this reflects the
    /// page's defaults.
    fn current_settings(&self) -> SettingsPayload;

    /// Whether this page is a placeholder without real persistence.
    fn is_stub(&self) -> bool {
        false
    }
}

/// Select the sub-page for a (possibly dotted) category key.
///
/// The first key segment picks the page; the remainder is forwarded through
/// [`SettingsSubPage::set_sub_category`]. Categories without a dedicated
/// page, and unrecognised keys, resolve to the generic fallback page —
/// resolution is total.
#[must_use]
pub fn resolve_sub_page(key: &str) -> Box<dyn SettingsSubPage> {
    let (category_key, sub_key) = split_sub_key(key);
    let mut page: Box<dyn SettingsSubPage> = match SettingsCategory::parse(category_key) {
        Some(SettingsCategory::General) => Box::new(GeneralSettingsPage::new()),
        Some(SettingsCategory::Pos) => Box::new(PosSettingsPage::new()),
        Some(SettingsCategory::Payments) => Box::new(PaymentsSettingsPage::new()),
        Some(SettingsCategory::Security) => Box::new(SecuritySettingsPage::new()),
        Some(SettingsCategory::Inventory) => Box::new(InventorySettingsPage::new()),
        Some(other) => Box::new(BaseSettingsPage::new(other.as_key())),
        None => Box::new(BaseSettingsPage::new(category_key)),
    };
    if let Some(sub_key) = sub_key {
        page.set_sub_category(sub_key);
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_covers_every_category() {
        for category in SettingsCategory::ALL {
            let page = resolve_sub_page(category.as_key());
            assert_eq!(page.category_key(), category.as_key());
        }
    }

    #[test]
    fn resolution_dispatches_on_the_first_segment() {
        let page = resolve_sub_page("pos.tax.rates");
        assert_eq!(page.category_key(), "pos");
    }

    #[test]
    fn unknown_keys_resolve_to_the_fallback_page() {
        let page = resolve_sub_page("caja");
        assert_eq!(page.category_key(), "caja");
        assert!(page.is_stub());
    }
}
