use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

/// Firestore's typed value encoding, e.g. `{ "stringValue": "x" }`.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum FirestoreValueModel {
    NullValue(()),
    BooleanValue(bool),
    /// int64, transmitted as a decimal string.
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPointModel),
    ArrayValue(ArrayValueModel),
    MapValue(MapValueModel),
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct GeoPointModel {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct ArrayValueModel {
    #[serde(default)]
    pub values: Vec<FirestoreValueModel>,
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct MapValueModel {
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValueModel>,
}

impl From<&Value> for FirestoreValueModel {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FirestoreValueModel::NullValue(()),
            Value::Bool(b) => FirestoreValueModel::BooleanValue(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FirestoreValueModel::IntegerValue(i.to_string()),
                None => FirestoreValueModel::DoubleValue(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => FirestoreValueModel::StringValue(s.clone()),
            Value::Array(items) => FirestoreValueModel::ArrayValue(ArrayValueModel {
                values: items.iter().map(Into::into).collect(),
            }),
            Value::Object(fields) => FirestoreValueModel::MapValue(MapValueModel {
                fields: encode_fields(fields),
            }),
        }
    }
}

impl From<FirestoreValueModel> for Value {
    fn from(value: FirestoreValueModel) -> Self {
        match value {
            FirestoreValueModel::NullValue(()) => Value::Null,
            FirestoreValueModel::BooleanValue(b) => Value::Bool(b),
            FirestoreValueModel::IntegerValue(s) => match s.parse::<i64>() {
                Ok(i) => Value::Number(i.into()),
                Err(_) => Value::String(s),
            },
            FirestoreValueModel::DoubleValue(d) => {
                Number::from_f64(d).map_or(Value::Null, Value::Number)
            }
            FirestoreValueModel::TimestampValue(s)
            | FirestoreValueModel::StringValue(s)
            | FirestoreValueModel::BytesValue(s)
            | FirestoreValueModel::ReferenceValue(s) => Value::String(s),
            FirestoreValueModel::GeoPointValue(p) => {
                serde_json::json!({ "latitude": p.latitude, "longitude": p.longitude })
            }
            FirestoreValueModel::ArrayValue(a) => {
                Value::Array(a.values.into_iter().map(Into::into).collect())
            }
            FirestoreValueModel::MapValue(m) => Value::Object(decode_fields(m.fields)),
        }
    }
}

pub(crate) fn encode_fields(fields: &Map<String, Value>) -> BTreeMap<String, FirestoreValueModel> {
    fields.iter().map(|(k, v)| (k.clone(), v.into())).collect()
}

pub(crate) fn decode_fields(fields: BTreeMap<String, FirestoreValueModel>) -> Map<String, Value> {
    fields.into_iter().map(|(k, v)| (k, v.into())).collect()
}
