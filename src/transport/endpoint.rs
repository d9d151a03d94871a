use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters is escaped in path segments.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// SimPro v3 resources consumed by this crate.
///
/// Paths are relative to the client's base URL. Templates may contain
/// `{name}` placeholders filled by [`Endpoint::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SimsList,
    SimLocation,
    SimsUsage,
    TariffsList,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::SimsList,
        Endpoint::SimLocation,
        Endpoint::SimsUsage,
        Endpoint::TariffsList,
    ];

    pub const fn template(self) -> &'static str {
        match self {
            Self::SimsList => "/sims",
            Self::SimLocation => "/sims/{iccid}/location",
            Self::SimsUsage => "/sims/usage",
            Self::TariffsList => "/tariffs",
        }
    }

    /// Fill the template placeholders, escaping each value as a path segment.
    ///
    /// Placeholders without a matching parameter are left untouched.
    pub fn render(self, params: &[(&str, &str)]) -> String {
        let mut path = self.template().to_owned();
        for (name, value) in params {
            let placeholder = format!("{{{name}}}");
            let escaped = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            path = path.replace(&placeholder, &escaped);
        }
        path
    }
}
