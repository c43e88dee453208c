use serde::Deserialize;
use std::collections::HashMap;

/// A single attribute value as it appears on the wire. The api only ever sends
/// numbers or strings; any other JSON shape is rejected while decoding the
/// envelope instead of surfacing later as a runtime kind check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub value: AttributeValue,
}

/// One entry of a state envelope's `included` list: a partial view of a device
/// (its COMMON properties, its SENSOR properties, ...) sharing an id with the
/// other fragments of the same device. DEVICE fragments carry no attributes.
#[derive(Debug, Deserialize)]
pub struct RawResource {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub attributes: HashMap<String, Attribute>,
}

#[derive(Debug, Deserialize)]
pub struct Locations {
    pub data: Vec<Location>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub attributes: LocationAttributes,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct LocationAttributes {
    pub name: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct State {
    pub data: StateData,
    pub included: Vec<RawResource>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct StateData {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub relationships: Relationships,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct Relationships {
    pub devices: DeviceRefs,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct DeviceRefs {
    pub data: Vec<DeviceRef>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct DeviceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub user_id: String,
}
