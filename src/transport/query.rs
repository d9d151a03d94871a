use url::form_urlencoded;

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Join values into a single comma-separated query value.
///
/// Each value is percent-encoded on its own, so a comma inside a value becomes
/// `%2C` while the separators stay literal. Splitting on `,` and
/// percent-decoding each token gives back the original values.
pub fn encode_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| encode_component(value.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Query string under construction. Values are stored already encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value`; empty values are skipped.
    pub fn push(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.pairs.push((key.to_owned(), encode_component(value)));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Add a comma-joined list; an empty list is skipped.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) {
        if values.is_empty() {
            return;
        }
        self.pairs.push((key.to_owned(), encode_list(values)));
    }

    /// Add a numeric value only when it is present and positive.
    pub fn push_positive(&mut self, key: &str, value: Option<u32>) {
        if let Some(value) = value.filter(|value| *value > 0) {
            self.pairs.push((key.to_owned(), value.to_string()));
        }
    }

    /// Append the query string to `path`, or return `path` unchanged if empty.
    pub fn append_to(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_owned();
        }
        let query = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={value}", encode_component(key)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}

#[cfg(test)]
pub(crate) fn decode_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|token| {
            form_urlencoded::parse(token.as_bytes())
                .next()
                .map(|(decoded, _)| decoded.into_owned())
                .unwrap_or_default()
        })
        .collect()
}
