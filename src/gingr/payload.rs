use serde_json::Value;

/// A Gingr response body. Some endpoints nest their result under `data`,
/// others return it bare.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Wrapped(Value),
    Raw(Value),
}

impl Payload {
    pub fn into_inner(self) -> Value {
        match self {
            Payload::Wrapped(v) | Payload::Raw(v) => v,
        }
    }
}

impl From<Value> for Payload {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) if !data.is_null() => Payload::Wrapped(data),
                removed => {
                    // `data: null` is kept so the caller sees the whole body.
                    if let Some(null) = removed {
                        map.insert("data".into(), null);
                    }
                    Payload::Raw(Value::Object(map))
                }
            },
            other => Payload::Raw(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_data_field() {
        let payload = Payload::from(json!({ "success": true, "data": [{ "id": 1 }] }));
        assert_eq!(payload, Payload::Wrapped(json!([{ "id": 1 }])));
    }

    #[test]
    fn bare_array_is_raw() {
        let payload = Payload::from(json!([1, 2]));
        assert_eq!(payload.into_inner(), json!([1, 2]));
    }

    #[test]
    fn null_data_falls_back_to_body() {
        let body = json!({ "data": null, "error": "nothing" });
        assert_eq!(Payload::from(body.clone()), Payload::Raw(body));
    }

    #[test]
    fn falsy_but_present_data_is_unwrapped() {
        assert_eq!(Payload::from(json!({ "data": 0 })).into_inner(), json!(0));
        assert_eq!(Payload::from(json!({ "data": [] })).into_inner(), json!([]));
    }
}
