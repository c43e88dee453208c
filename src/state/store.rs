use crate::device::{Device, DeviceError, MergedAttributes};
use crate::gardena::response::State;
use crate::state::merge::merge_resources;
use std::collections::HashMap;
use thiserror::Error;

/// Holds the devices constructed during the initial load, keyed by device id.
/// Insertion is additive only; nothing is ever evicted or updated in place.
/// The store is built once at startup and read by the metrics layer afterwards.
#[derive(Debug, Default)]
pub struct Store {
    devices: HashMap<String, Device>,
}

impl Store {
    pub fn new() -> Self {
        Store { devices: HashMap::new() }
    }

    /// Merges the envelope's included resources and adds one device per merged
    /// record. Aborts on the first failing record; devices already added by
    /// this call stay in the store.
    pub fn store_devices(&mut self, state: &State) -> Result<(), StoreError> {
        let merged = merge_resources(&state.included);
        for (id, attributes) in merged {
            self.add_device(id, &attributes)?;
        }
        Ok(())
    }

    fn add_device(&mut self, id: String, attributes: &MergedAttributes) -> Result<(), StoreError> {
        if self.devices.contains_key(&id) {
            return Err(StoreError::DuplicateDeviceId(id));
        }
        let device = Device::from_merged(attributes)?;
        self.devices.insert(id, device);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("device with id '{0}' is already in the store")]
    DuplicateDeviceId(String),
    #[error(transparent)]
    Device(#[from] DeviceError),
}
