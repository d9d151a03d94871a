use serde::{Deserialize, Deserializer};

/// Scalar returned by SimPro as a JSON string, number or boolean.
///
/// Non-string values are rendered through their JSON display form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportText {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl TransportText {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

/// Decode a missing or `null` text-like field as an empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<TransportText> = Deserialize::deserialize(deserializer)?;
    Ok(value.map(TransportText::into_string).unwrap_or_default())
}

/// Decode a `null` field as the type's default value.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "text")]
        value: String,
        #[serde(default, deserialize_with = "nullable")]
        count: i64,
    }

    #[test]
    fn text_accepts_strings_numbers_and_null() {
        let probe: Probe = serde_json::from_str(r#"{"value":"abc","count":3}"#).unwrap();
        assert_eq!(probe.value, "abc");
        assert_eq!(probe.count, 3);

        let probe: Probe = serde_json::from_str(r#"{"value":1024,"count":null}"#).unwrap();
        assert_eq!(probe.value, "1024");
        assert_eq!(probe.count, 0);

        let probe: Probe = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(probe.value, "");
        assert_eq!(probe.count, 0);
    }

    #[test]
    fn text_rejects_objects() {
        assert!(serde_json::from_str::<Probe>(r#"{"value":{"a":1}}"#).is_err());
    }
}
