use crate::device::common::Common;
use crate::device::{DeviceError, MergedAttributes};

pub const TYPE_MOWER: &str = "MOWER";
pub const ATTR_STATE: &str = "state";
pub const ATTR_ACTIVITY: &str = "activity";
pub const ATTR_OPERATING_HOURS: &str = "operatingHours";

#[derive(Debug, PartialEq)]
pub struct Mower {
    state: String,
    activity: String,
    operating_hours: f64,
    common: Common,
}

impl Mower {
    pub(super) fn from_merged(attributes: &MergedAttributes) -> Result<Mower, DeviceError> {
        Ok(Mower {
            state: attributes.str_attr(ATTR_STATE)?,
            activity: attributes.str_attr(ATTR_ACTIVITY)?,
            operating_hours: attributes.float_attr(ATTR_OPERATING_HOURS)?,
            common: Common::from_merged(attributes)?,
        })
    }

    pub fn device_id(&self) -> &str {
        self.common.id()
    }

    pub fn float_attr(&self, key: &str) -> Result<f64, DeviceError> {
        match key {
            ATTR_OPERATING_HOURS => Ok(self.operating_hours),
            _ => self.common.float_attr(key),
        }
    }

    pub fn str_attr(&self, key: &str) -> Result<&str, DeviceError> {
        match key {
            ATTR_STATE => Ok(&self.state),
            ATTR_ACTIVITY => Ok(&self.activity),
            _ => self.common.str_attr(key),
        }
    }
}
