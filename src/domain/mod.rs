//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SimUsageQuery, SimsListFilter, TariffListFilter};
pub use response::{
    Mno, SimLocation, SimsListItem, SimsListResponse, SimsUsageItem, SimsUsageResponse,
    TariffBearer, TariffListItem, TariffListResponse,
};
pub use validation::ValidationError;
pub use value::{AccountNumber, Iccid, Page};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sims_list_filter_builder_sets_fields() {
        let filter = SimsListFilter::default()
            .status("active")
            .account_number(AccountNumber::new("ACC-1").unwrap())
            .tariff_name("IoT 1GB")
            .mno("EE")
            .custom_field1("fleet-7");

        assert_eq!(filter.status.as_deref(), Some("active"));
        assert_eq!(
            filter.account_number.as_ref().map(AccountNumber::as_str),
            Some("ACC-1")
        );
        assert_eq!(filter.tariff_name.as_deref(), Some("IoT 1GB"));
        assert_eq!(filter.mno.as_deref(), Some("EE"));
        assert_eq!(filter.custom_field1.as_deref(), Some("fleet-7"));
    }

    #[test]
    fn default_filters_are_empty() {
        let filter = SimsListFilter::default();
        assert!(filter.status.is_none());
        assert!(filter.account_number.is_none());

        let usage = SimUsageQuery::default();
        assert!(usage.iccids.is_empty());
        assert_eq!(usage.page, Page::default());
    }

    #[test]
    fn page_helpers_attach_pagination() {
        let usage =
            SimUsageQuery::for_iccids(vec![Iccid::new("8901").unwrap()]).page(Page::new(2, 50));
        assert_eq!(usage.page.page, Some(2));
        assert_eq!(usage.page.limit, Some(50));

        let tariffs = TariffListFilter::for_accounts(vec![AccountNumber::new("A").unwrap()])
            .page(Page {
                page: None,
                limit: Some(10),
            });
        assert_eq!(tariffs.account_numbers.len(), 1);
        assert_eq!(tariffs.page.page, None);
        assert_eq!(tariffs.page.limit, Some(10));
    }
}
