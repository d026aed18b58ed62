use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUCCESS_STATUS_CODE: i64 = 200;

/// The backend's uniform response wrapper: `{ statusCode, message, data }`.
///
/// The whole parsed body is kept so that endpoints answering with a flat object (login)
/// can still be read. Field accessors are lenient: a zero, non-numeric or missing
/// `statusCode` reads as absent, and so does an empty or non-string `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope {
    body: Value,
}

impl Envelope {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Business status. Numeric strings such as `"500"` count as codes; zero and
    /// anything non-numeric read as absent.
    pub fn status_code(&self) -> Option<i64> {
        self.body
            .get("statusCode")
            .and_then(status_number)
            .filter(|code| *code != 0)
    }

    pub fn message(&self) -> Option<&str> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn data(&self) -> Option<&Value> {
        self.body.get("data").filter(|data| !data.is_null())
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|value| !value.is_null())
    }

    pub fn is_success(&self) -> bool {
        self.status_code() == Some(SUCCESS_STATUS_CODE)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.data()
            .map(|data| serde_json::from_value(data.clone()))
            .transpose()
    }

    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

impl From<Value> for Envelope {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn status_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_wire_fields() {
        let envelope = Envelope::new(json!({"statusCode": 200, "message": "OK", "data": [1, 2]}));
        assert_eq!(envelope.status_code(), Some(200));
        assert_eq!(envelope.message(), Some("OK"));
        assert_eq!(envelope.data(), Some(&json!([1, 2])));
        assert!(envelope.is_success());
    }

    #[test]
    fn falsy_fields_read_as_absent() {
        let envelope = Envelope::new(json!({"statusCode": 0, "message": "", "data": null}));
        assert_eq!(envelope.status_code(), None);
        assert_eq!(envelope.message(), None);
        assert_eq!(envelope.data(), None);
    }

    #[test]
    fn non_object_bodies_have_no_fields() {
        for body in [json!(null), json!([1, 2, 3]), json!("text"), json!(42)] {
            let envelope = Envelope::new(body);
            assert_eq!(envelope.status_code(), None);
            assert_eq!(envelope.message(), None);
            assert_eq!(envelope.data(), None);
        }
    }

    #[test]
    fn numeric_status_code_forms() {
        assert_eq!(Envelope::new(json!({"statusCode": "500"})).status_code(), Some(500));
        assert_eq!(Envelope::new(json!({"statusCode": " 403 "})).status_code(), Some(403));
        assert_eq!(Envelope::new(json!({"statusCode": 200.0})).status_code(), Some(200));
        assert_eq!(Envelope::new(json!({"statusCode": "lỗi"})).status_code(), None);
        assert_eq!(Envelope::new(json!({"statusCode": 1.5})).status_code(), None);
        assert_eq!(Envelope::new(json!({"statusCode": true})).status_code(), None);
    }

    #[test]
    fn typed_data_extraction() {
        let envelope = Envelope::new(json!({"statusCode": 200, "data": {"id": 5}}));
        let data: Option<Value> = envelope.data_as().unwrap();
        assert_eq!(data, Some(json!({"id": 5})));

        let empty = Envelope::new(json!({"statusCode": 200}));
        let nothing: Option<Vec<Value>> = empty.data_as().unwrap();
        assert!(nothing.is_none());
    }
}
