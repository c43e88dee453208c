mod common;
mod merged;
mod mower;
mod sensor;

pub use common::{ATTR_BATTERY_LEVEL, ATTR_BATTERY_STATE, ATTR_MODEL_TYPE, ATTR_NAME, ATTR_RF_LINK_LEVEL, ATTR_RF_LINK_STATE, ATTR_SERIAL, COMMON_TYPE};
pub use merged::MergedAttributes;
pub use mower::{ATTR_ACTIVITY, ATTR_OPERATING_HOURS, ATTR_STATE, Mower, TYPE_MOWER};
pub use sensor::{ATTR_SOIL_HUMIDITY, ATTR_SOIL_TEMPERATURE, Sensor, TYPE_SENSOR};

use thiserror::Error;

/// Type tag of the generic fragment that only carries device relationships.
pub const GENERIC_DEVICE_TYPE: &str = "DEVICE";

/// A fully constructed garden device. Construction is all-or-nothing and the
/// fields never change afterwards; the store holds one value per device id for
/// the lifetime of the process.
#[derive(Debug, PartialEq)]
pub enum Device {
    Sensor(Sensor),
    Mower(Mower),
}

impl Device {
    /// Creates a device from a merged set of attributes, dispatching on its
    /// recorded type tag. Currently supported types are SENSOR and MOWER.
    pub fn from_merged(attributes: &MergedAttributes) -> Result<Device, DeviceError> {
        match attributes.type_tag() {
            Some(TYPE_SENSOR) => Ok(Device::Sensor(Sensor::from_merged(attributes)?)),
            Some(TYPE_MOWER) => Ok(Device::Mower(Mower::from_merged(attributes)?)),
            other => Err(DeviceError::UnsupportedDeviceType(other.unwrap_or_default().to_string())),
        }
    }

    pub fn device_id(&self) -> &str {
        match self {
            Device::Sensor(sensor) => sensor.device_id(),
            Device::Mower(mower) => mower.device_id(),
        }
    }

    /// The fixed tag of the variant, not the value recorded while merging.
    pub fn device_type(&self) -> &'static str {
        match self {
            Device::Sensor(_) => TYPE_SENSOR,
            Device::Mower(_) => TYPE_MOWER,
        }
    }

    pub fn float_attr(&self, key: &str) -> Result<f64, DeviceError> {
        match self {
            Device::Sensor(sensor) => sensor.float_attr(key),
            Device::Mower(mower) => mower.float_attr(key),
        }
    }

    pub fn str_attr(&self, key: &str) -> Result<&str, DeviceError> {
        match self {
            Device::Sensor(sensor) => sensor.str_attr(key),
            Device::Mower(mower) => mower.str_attr(key),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DeviceError {
    #[error("unsupported device type '{0}'")]
    UnsupportedDeviceType(String),
    #[error("attribute '{field}' is missing or has an unexpected kind in {attributes}")]
    AttributeTypeMismatch { field: String, attributes: String },
    #[error("unsupported attribute '{0}'")]
    AttributeUnknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gardena::response::AttributeValue;
    use pretty_assertions::assert_eq;

    pub(super) fn common_attributes(id: &str, name: &str) -> MergedAttributes {
        let mut attributes = MergedAttributes::new(id);
        attributes.insert(ATTR_NAME, AttributeValue::Text(name.to_string()));
        attributes.insert(ATTR_BATTERY_LEVEL, AttributeValue::Float(98.0));
        attributes.insert(ATTR_BATTERY_STATE, AttributeValue::Text("OK".to_string()));
        attributes.insert(ATTR_RF_LINK_LEVEL, AttributeValue::Float(90.0));
        attributes.insert(ATTR_SERIAL, AttributeValue::Text("10000000".to_string()));
        attributes.insert(ATTR_MODEL_TYPE, AttributeValue::Text("GARDENA smart Sensor".to_string()));
        attributes.insert(ATTR_RF_LINK_STATE, AttributeValue::Text("ONLINE".to_string()));
        attributes
    }

    fn sensor_attributes() -> MergedAttributes {
        let mut attributes = common_attributes("dev-1-id", "Sensor01");
        attributes.set_type_tag(TYPE_SENSOR);
        attributes.insert(ATTR_SOIL_HUMIDITY, AttributeValue::Float(95.0));
        attributes.insert(ATTR_SOIL_TEMPERATURE, AttributeValue::Float(21.5));
        attributes
    }

    fn mower_attributes() -> MergedAttributes {
        let mut attributes = common_attributes("dev-2-id", "SILENO");
        attributes.set_type_tag(TYPE_MOWER);
        attributes.insert(ATTR_STATE, AttributeValue::Text("OK".to_string()));
        attributes.insert(ATTR_ACTIVITY, AttributeValue::Text("PARKED_TIMER".to_string()));
        attributes.insert(ATTR_OPERATING_HOURS, AttributeValue::Float(435.0));
        attributes
    }

    #[test]
    fn from_merged_creates_a_sensor() -> Result<(), DeviceError> {
        let device = Device::from_merged(&sensor_attributes())?;

        assert_eq!(device.device_id(), "dev-1-id");
        assert_eq!(device.device_type(), TYPE_SENSOR);
        assert_eq!(device.float_attr(ATTR_SOIL_HUMIDITY)?, 95.0);
        assert_eq!(device.float_attr(ATTR_SOIL_TEMPERATURE)?, 21.5);
        assert_eq!(device.float_attr(ATTR_BATTERY_LEVEL)?, 98.0);
        assert_eq!(device.str_attr(ATTR_NAME)?, "Sensor01");
        assert_eq!(device.str_attr(ATTR_RF_LINK_STATE)?, "ONLINE");

        Ok(())
    }

    #[test]
    fn from_merged_creates_a_mower() -> Result<(), DeviceError> {
        let device = Device::from_merged(&mower_attributes())?;

        assert_eq!(device.device_id(), "dev-2-id");
        assert_eq!(device.device_type(), TYPE_MOWER);
        assert_eq!(device.float_attr(ATTR_OPERATING_HOURS)?, 435.0);
        assert_eq!(device.str_attr(ATTR_STATE)?, "OK");
        assert_eq!(device.str_attr(ATTR_ACTIVITY)?, "PARKED_TIMER");
        assert_eq!(device.str_attr(ATTR_NAME)?, "SILENO");

        Ok(())
    }

    #[test]
    fn from_merged_fails_for_an_unsupported_type_tag() {
        let mut attributes = common_attributes("dev-3-id", "Valve");
        attributes.set_type_tag("VALVE");

        let result = Device::from_merged(&attributes);

        assert_eq!(result, Err(DeviceError::UnsupportedDeviceType("VALVE".to_string())));
    }

    #[test]
    fn from_merged_fails_without_a_type_tag() {
        let attributes = common_attributes("dev-3-id", "Unknown");

        let result = Device::from_merged(&attributes);

        assert_eq!(result, Err(DeviceError::UnsupportedDeviceType(String::new())));
    }

    #[test]
    fn from_merged_is_all_or_nothing() {
        let mut attributes = sensor_attributes();
        attributes.insert(ATTR_SOIL_HUMIDITY, AttributeValue::Text("95".to_string()));

        let result = Device::from_merged(&attributes);

        assert!(matches!(result, Err(DeviceError::AttributeTypeMismatch { ref field, .. }) if field == ATTR_SOIL_HUMIDITY));
    }

    #[test]
    fn unknown_attribute_keys_fail_for_both_kinds() -> Result<(), DeviceError> {
        let device = Device::from_merged(&sensor_attributes())?;

        assert_eq!(device.str_attr("rand"), Err(DeviceError::AttributeUnknown("rand".to_string())));
        assert_eq!(device.float_attr("foo"), Err(DeviceError::AttributeUnknown("foo".to_string())));

        Ok(())
    }

    #[test]
    fn accessors_return_identical_values_on_repeated_calls() -> Result<(), DeviceError> {
        let device = Device::from_merged(&mower_attributes())?;

        assert_eq!(device.float_attr(ATTR_OPERATING_HOURS)?, device.float_attr(ATTR_OPERATING_HOURS)?);
        assert_eq!(device.str_attr(ATTR_ACTIVITY)?, device.str_attr(ATTR_ACTIVITY)?);

        Ok(())
    }
}
