/// Value of one Gingr request parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    /// Sent as repeated `name[]` fields so Gingr decodes it as an array.
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

/// Ordered parameter mapping for a Gingr call, excluding the API key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. A repeated name replaces the earlier value.
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name.to_string(), value)),
        }
        self
    }

    /// Flatten into wire pairs with the credential first.
    pub(crate) fn to_pairs(&self, api_key: &str) -> Vec<(String, String)> {
        let mut pairs = vec![("key".to_string(), api_key.to_string())];
        for (name, value) in &self.0 {
            if name == "key" {
                continue;
            }
            match value {
                ParamValue::Scalar(v) => pairs.push((name.clone(), v.clone())),
                ParamValue::List(items) => {
                    let field = format!("{name}[]");
                    pairs.extend(items.iter().map(|item| (field.clone(), item.clone())));
                }
            }
        }
        pairs
    }
}

/// Split a comma-separated id list such as `"1,2,3"`.
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_always_first() {
        let params = Params::new().with("limit", 20u32).with("search", "rex");
        let pairs = params.to_pairs("secret");
        assert_eq!(pairs[0], ("key".into(), "secret".into()));
        assert_eq!(pairs[1], ("limit".into(), "20".into()));
        assert_eq!(pairs[2], ("search".into(), "rex".into()));
    }

    #[test]
    fn caller_cannot_override_credential() {
        let pairs = Params::new().with("key", "spoofed").to_pairs("secret");
        assert_eq!(pairs, vec![("key".into(), "secret".into())]);
    }

    #[test]
    fn lists_expand_to_bracketed_fields() {
        let pairs = Params::new()
            .with("type_ids", split_ids("1,2"))
            .with("full_day", true)
            .to_pairs("k");
        assert_eq!(
            pairs[1..],
            [
                ("type_ids[]".to_string(), "1".to_string()),
                ("type_ids[]".to_string(), "2".to_string()),
                ("full_day".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn with_replaces_existing_value() {
        let params = Params::new().with("limit", 100u32).with("limit", 5u32);
        assert_eq!(
            params.to_pairs("k"),
            vec![
                ("key".to_string(), "k".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn split_ids_drops_blanks() {
        assert_eq!(split_ids(" 1, 2,,3 "), vec!["1", "2", "3"]);
        assert!(split_ids("").is_empty());
    }
}
