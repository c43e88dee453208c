use crate::device::{DeviceError, MergedAttributes};

/// Type tag of the fragment carrying the attributes every device shares.
pub const COMMON_TYPE: &str = "COMMON";

pub const ATTR_NAME: &str = "name";
pub const ATTR_BATTERY_LEVEL: &str = "batteryLevel";
pub const ATTR_BATTERY_STATE: &str = "batteryState";
pub const ATTR_RF_LINK_LEVEL: &str = "rfLinkLevel";
pub const ATTR_SERIAL: &str = "serial";
pub const ATTR_MODEL_TYPE: &str = "modelType";
pub const ATTR_RF_LINK_STATE: &str = "rfLinkState";

/// The attributes shared by every device variant. All fields are mandatory at
/// construction, even where a variant never exposes one through its accessors.
#[derive(Debug, PartialEq)]
pub struct Common {
    id: String,
    name: String,
    battery_level: f64,
    battery_state: String,
    rf_link_level: f64,
    serial: String,
    model_type: String,
    rf_link_state: String,
}

impl Common {
    pub(super) fn from_merged(attributes: &MergedAttributes) -> Result<Common, DeviceError> {
        Ok(Common {
            id: attributes.id().to_string(),
            name: attributes.str_attr(ATTR_NAME)?,
            battery_level: attributes.float_attr(ATTR_BATTERY_LEVEL)?,
            battery_state: attributes.str_attr(ATTR_BATTERY_STATE)?,
            rf_link_level: attributes.float_attr(ATTR_RF_LINK_LEVEL)?,
            serial: attributes.str_attr(ATTR_SERIAL)?,
            model_type: attributes.str_attr(ATTR_MODEL_TYPE)?,
            rf_link_state: attributes.str_attr(ATTR_RF_LINK_STATE)?,
        })
    }

    pub(super) fn id(&self) -> &str {
        &self.id
    }

    pub(super) fn float_attr(&self, key: &str) -> Result<f64, DeviceError> {
        match key {
            ATTR_BATTERY_LEVEL => Ok(self.battery_level),
            ATTR_RF_LINK_LEVEL => Ok(self.rf_link_level),
            _ => Err(DeviceError::AttributeUnknown(key.to_string())),
        }
    }

    pub(super) fn str_attr(&self, key: &str) -> Result<&str, DeviceError> {
        match key {
            ATTR_NAME => Ok(&self.name),
            ATTR_BATTERY_STATE => Ok(&self.battery_state),
            ATTR_SERIAL => Ok(&self.serial),
            ATTR_MODEL_TYPE => Ok(&self.model_type),
            ATTR_RF_LINK_STATE => Ok(&self.rf_link_state),
            _ => Err(DeviceError::AttributeUnknown(key.to_string())),
        }
    }
}
