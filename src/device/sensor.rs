use crate::device::common::Common;
use crate::device::{DeviceError, MergedAttributes};

pub const TYPE_SENSOR: &str = "SENSOR";
pub const ATTR_SOIL_HUMIDITY: &str = "soilHumidity";
pub const ATTR_SOIL_TEMPERATURE: &str = "soilTemperature";

#[derive(Debug, PartialEq)]
pub struct Sensor {
    soil_humidity: f64,
    soil_temperature: f64,
    common: Common,
}

impl Sensor {
    pub(super) fn from_merged(attributes: &MergedAttributes) -> Result<Sensor, DeviceError> {
        Ok(Sensor {
            soil_humidity: attributes.float_attr(ATTR_SOIL_HUMIDITY)?,
            soil_temperature: attributes.float_attr(ATTR_SOIL_TEMPERATURE)?,
            common: Common::from_merged(attributes)?,
        })
    }

    pub fn device_id(&self) -> &str {
        self.common.id()
    }

    pub fn float_attr(&self, key: &str) -> Result<f64, DeviceError> {
        match key {
            ATTR_SOIL_HUMIDITY => Ok(self.soil_humidity),
            ATTR_SOIL_TEMPERATURE => Ok(self.soil_temperature),
            _ => self.common.float_attr(key),
        }
    }

    pub fn str_attr(&self, key: &str) -> Result<&str, DeviceError> {
        // A sensor has no textual attributes of its own.
        self.common.str_attr(key)
    }
}
