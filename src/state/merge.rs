use crate::device::{COMMON_TYPE, GENERIC_DEVICE_TYPE, MergedAttributes};
use crate::gardena::response::RawResource;
use std::collections::HashMap;

/// Folds the resource fragments of a state envelope into one flattened record
/// per device id. The type tag is recorded only for the variant fragment
/// (SENSOR, MOWER, ...); DEVICE and COMMON are generic markers. Later
/// fragments overwrite earlier attribute values on key collisions.
pub fn merge_resources(resources: &[RawResource]) -> HashMap<String, MergedAttributes> {
    let mut merged: HashMap<String, MergedAttributes> = HashMap::new();
    for resource in resources {
        let record = merged
            .entry(resource.id.clone())
            .or_insert_with(|| MergedAttributes::new(resource.id.clone()));

        if resource.type_tag != GENERIC_DEVICE_TYPE && resource.type_tag != COMMON_TYPE {
            record.set_type_tag(resource.type_tag.clone());
        }
        for (key, attribute) in &resource.attributes {
            record.insert(key.clone(), attribute.value.clone());
        }
    }
    merged
}
