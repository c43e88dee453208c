use crate::device::DeviceError;
use crate::gardena::response::AttributeValue;
use std::collections::HashMap;

/// The flattened view of all resource fragments sharing one device id. Built
/// by the resource merger and consumed by the device constructors; it never
/// outlives the initial load.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedAttributes {
    id: String,
    type_tag: Option<String>,
    attributes: HashMap<String, AttributeValue>,
}

impl MergedAttributes {
    pub fn new(id: impl Into<String>) -> Self {
        MergedAttributes {
            id: id.into(),
            type_tag: None,
            attributes: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub fn set_type_tag(&mut self, tag: impl Into<String>) {
        self.type_tag = Some(tag.into());
    }

    /// Records an attribute, overwriting any earlier fragment's value for the
    /// same key.
    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.attributes.insert(key.into(), value);
    }

    /// Looks up a required numeric attribute. A missing key or a textual value
    /// both fail, naming the field and the full mapping for diagnostics.
    pub fn float_attr(&self, field: &str) -> Result<f64, DeviceError> {
        match self.attributes.get(field) {
            Some(AttributeValue::Float(value)) => Ok(*value),
            _ => Err(DeviceError::AttributeTypeMismatch {
                field: field.to_string(),
                attributes: format!("{:?}", self.attributes),
            }),
        }
    }

    /// Looks up a required textual attribute.
    pub fn str_attr(&self, field: &str) -> Result<String, DeviceError> {
        match self.attributes.get(field) {
            Some(AttributeValue::Text(value)) => Ok(value.clone()),
            _ => Err(DeviceError::AttributeTypeMismatch {
                field: field.to_string(),
                attributes: format!("{:?}", self.attributes),
            }),
        }
    }
}
