use crate::domain::value::{AccountNumber, Iccid, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional filters for `GET /sims`.
///
/// `None` and empty strings are both omitted from the query.
pub struct SimsListFilter {
    pub status: Option<String>,
    pub account_number: Option<AccountNumber>,
    pub tariff_name: Option<String>,
    pub mno: Option<String>,
    pub custom_field1: Option<String>,
}

impl SimsListFilter {
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn account_number(mut self, account_number: AccountNumber) -> Self {
        self.account_number = Some(account_number);
        self
    }

    pub fn tariff_name(mut self, tariff_name: impl Into<String>) -> Self {
        self.tariff_name = Some(tariff_name.into());
        self
    }

    pub fn mno(mut self, mno: impl Into<String>) -> Self {
        self.mno = Some(mno.into());
        self
    }

    pub fn custom_field1(mut self, value: impl Into<String>) -> Self {
        self.custom_field1 = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Query for `GET /sims/usage`.
///
/// An empty `iccids` list asks for usage of every SIM on the account.
pub struct SimUsageQuery {
    pub iccids: Vec<Iccid>,
    pub page: Page,
}

impl SimUsageQuery {
    pub fn for_iccids(iccids: Vec<Iccid>) -> Self {
        Self {
            iccids,
            page: Page::default(),
        }
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional filters for `GET /tariffs`.
pub struct TariffListFilter {
    pub account_numbers: Vec<AccountNumber>,
    pub page: Page,
}

impl TariffListFilter {
    pub fn for_accounts(account_numbers: Vec<AccountNumber>) -> Self {
        Self {
            account_numbers,
            page: Page::default(),
        }
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}
