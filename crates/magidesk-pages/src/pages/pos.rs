//! Point-of-sale settings sub-page.

use tracing::debug;

use magidesk_settings::{PosSettings, SettingsCategory, SettingsPayload, TaxRate};

use crate::controls::{NumberField, TextField, TimeField, ToggleField};
use crate::subpage::SettingsSubPage;

/// Section of the POS page brought into focus by a sub-category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosSection {
    /// Cash drawer behaviour.
    CashDrawer,
    /// Dining table layout.
    Tables,
    /// Shift scheduling.
    Shifts,
    /// Tax behaviour and the rate table.
    Tax,
}

impl PosSection {
    fn parse(sub_key: &str) -> Option<Self> {
        let section = sub_key.split('.').next().unwrap_or(sub_key);
        match section.trim().to_ascii_lowercase().as_str() {
            "cash-drawer" | "cashdrawer" | "drawer" => Some(Self::CashDrawer),
            "tables" | "table-layout" => Some(Self::Tables),
            "shifts" => Some(Self::Shifts),
            "tax" | "taxes" => Some(Self::Tax),
            _ => None,
        }
    }
}

/// One editable row of the tax rate table.
///
/// Rows are UI-bound copies of the document entries; edits stay in the row
/// until collect rebuilds the document's rate list.
#[derive(Debug, Default)]
pub struct TaxRateRow {
    /// Rate name entry.
    pub name: TextField,
    /// Percentage entry.
    pub rate: NumberField,
    /// Default-rate toggle.
    pub is_default: ToggleField,
    fallback_rate: f64,
}

impl TaxRateRow {
    /// Construct an empty row, as the "add rate" button does.
    #[must_use]
    pub fn new() -> Self {
        let mut row = Self::default();
        row.rate.set_f64(0.0);
        row
    }

    fn from_rate(rate: &TaxRate) -> Self {
        let mut row = Self {
            fallback_rate: rate.rate,
            ..Self::default()
        };
        row.name.set_text(&rate.name);
        row.rate.set_f64(rate.rate);
        row.is_default.set(rate.is_default);
        row
    }

    fn collect(&self) -> TaxRate {
        TaxRate {
            name: self.name.text().to_string(),
            rate: self.rate.parse_f64().unwrap_or(self.fallback_rate),
            is_default: self.is_default.is_on(),
        }
    }
}

/// Sub-page binding the point-of-sale behaviour document.
#[derive(Debug, Default)]
pub struct PosSettingsPage {
    settings: PosSettings,
    focus: Option<PosSection>,
    /// Drawer pop-on-sale toggle.
    pub open_on_sale: ToggleField,
    /// No-sale reason requirement toggle.
    pub require_reason_on_open: ToggleField,
    /// Maximum drawer float entry.
    pub max_float: NumberField,
    /// Table service toggle.
    pub tables_enabled: ToggleField,
    /// Default table area entry.
    pub default_area: TextField,
    /// Table count entry.
    pub table_count: NumberField,
    /// Clock-in requirement toggle.
    pub enforce_clock_in: ToggleField,
    /// First shift opening time entry.
    pub opens_at: TimeField,
    /// Last shift closing time entry.
    pub closes_at: TimeField,
    /// Tax-inclusive pricing toggle.
    pub prices_include_tax: ToggleField,
    /// Editable tax rate rows, in display order.
    pub tax_rows: Vec<TaxRateRow>,
}

impl PosSettingsPage {
    /// Construct the page showing default values.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self::default();
        page.load();
        page
    }

    /// Section focused by the last sub-category hint, if it named one.
    #[must_use]
    pub const fn focused_section(&self) -> Option<PosSection> {
        self.focus
    }

    /// Append an empty tax rate row, returning it for editing.
    pub fn add_rate_row(&mut self) -> &mut TaxRateRow {
        self.tax_rows.push(TaxRateRow::new());
        self.tax_rows
            .last_mut()
            .unwrap_or_else(|| unreachable!("row was just pushed"))
    }

    /// Remove a tax rate row by index.
    pub fn remove_rate_row(&mut self, index: usize) -> Option<TaxRateRow> {
        if index < self.tax_rows.len() {
            Some(self.tax_rows.remove(index))
        } else {
            None
        }
    }

    /// Repaint every bound control from the held document.
    fn load(&mut self) {
        self.open_on_sale.set(self.settings.cash_drawer.open_on_sale);
        self.require_reason_on_open
            .set(self.settings.cash_drawer.require_reason_on_open);
        self.max_float.set_f64(self.settings.cash_drawer.max_float);

        self.tables_enabled.set(self.settings.table_layout.enabled);
        self.default_area
            .set_text(&self.settings.table_layout.default_area);
        self.table_count
            .set_i32(self.settings.table_layout.table_count);

        self.enforce_clock_in
            .set(self.settings.shifts.enforce_clock_in);
        self.opens_at.set_time(self.settings.shifts.opens_at);
        self.closes_at.set_time(self.settings.shifts.closes_at);

        self.prices_include_tax
            .set(self.settings.tax.prices_include_tax);
        self.tax_rows = self
            .settings
            .tax
            .rates
            .iter()
            .map(TaxRateRow::from_rate)
            .collect();
    }

    /// Copy every control value into a fresh document.
    fn collect(&self) -> PosSettings {
        let mut settings = self.settings.clone();

        settings.cash_drawer.open_on_sale = self.open_on_sale.is_on();
        settings.cash_drawer.require_reason_on_open = self.require_reason_on_open.is_on();
        settings.cash_drawer.max_float = self
            .max_float
            .parse_f64()
            .unwrap_or(settings.cash_drawer.max_float);

        settings.table_layout.enabled = self.tables_enabled.is_on();
        settings.table_layout.default_area = self.default_area.text().to_string();
        settings.table_layout.table_count = self
            .table_count
            .parse_i32()
            .unwrap_or(settings.table_layout.table_count);

        settings.shifts.enforce_clock_in = self.enforce_clock_in.is_on();
        settings.shifts.opens_at = self.opens_at.parse().unwrap_or(settings.shifts.opens_at);
        settings.shifts.closes_at = self.closes_at.parse().unwrap_or(settings.shifts.closes_at);

        settings.tax.prices_include_tax = self.prices_include_tax.is_on();
        settings.tax.rates = self.tax_rows.iter().map(TaxRateRow::collect).collect();

        settings
    }
}

impl SettingsSubPage for PosSettingsPage {
    fn category_key(&self) -> &str {
        SettingsCategory::Pos.as_key()
    }

    fn set_sub_category(&mut self, sub_key: &str) {
        self.focus = PosSection::parse(sub_key);
    }

    fn set_settings(&mut self, payload: &SettingsPayload) {
        if let SettingsPayload::Pos(settings) = payload {
            self.settings = settings.clone();
            self.load();
        } else {
            debug!(
                expected = %self.category_key(),
                received = %payload.category_key(),
                "ignoring mismatched settings payload"
            );
        }
    }

    fn current_settings(&self) -> SettingsPayload {
        SettingsPayload::Pos(self.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_category_maps_to_a_focused_section() {
        let mut page = PosSettingsPage::new();
        page.set_sub_category("tax.rates");
        assert_eq!(page.focused_section(), Some(PosSection::Tax));

        page.set_sub_category("cash-drawer");
        assert_eq!(page.focused_section(), Some(PosSection::CashDrawer));

        page.set_sub_category("loyalty");
        assert_eq!(page.focused_section(), None);
    }

    #[test]
    fn row_edits_do_not_touch_the_document_until_collect() {
        let mut settings = PosSettings::default();
        settings.tax.rates = vec![TaxRate {
            name: "GST".to_string(),
            rate: 5.0,
            is_default: false,
        }];

        let mut page = PosSettingsPage::new();
        page.set_settings(&SettingsPayload::Pos(settings.clone()));
        page.tax_rows[0].rate.set_text("9.75");

        // The held document still carries the loaded rate.
        let SettingsPayload::Pos(collected) = page.current_settings() else {
            panic!("POS page must collect a POS payload");
        };
        assert_eq!(collected.tax.rates[0].rate, 9.75);
        page.set_settings(&SettingsPayload::Pos(settings));
        let SettingsPayload::Pos(reloaded) = page.current_settings() else {
            panic!("POS page must collect a POS payload");
        };
        assert_eq!(reloaded.tax.rates[0].rate, 5.0);
    }

    #[test]
    fn malformed_rate_text_falls_back_to_the_loaded_value() {
        let mut settings = PosSettings::default();
        settings.tax.rates = vec![TaxRate {
            name: "GST".to_string(),
            rate: 5.0,
            is_default: true,
        }];

        let mut page = PosSettingsPage::new();
        page.set_settings(&SettingsPayload::Pos(settings));
        page.tax_rows[0].rate.set_text("five-ish");

        let SettingsPayload::Pos(collected) = page.current_settings() else {
            panic!("POS page must collect a POS payload");
        };
        assert_eq!(collected.tax.rates[0].rate, 5.0);
    }
}
