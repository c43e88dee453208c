use crate::device::{
    ATTR_ACTIVITY, ATTR_BATTERY_LEVEL, ATTR_BATTERY_STATE, ATTR_MODEL_TYPE, ATTR_NAME, ATTR_OPERATING_HOURS, ATTR_RF_LINK_LEVEL,
    ATTR_RF_LINK_STATE, ATTR_SOIL_HUMIDITY, ATTR_SOIL_TEMPERATURE, ATTR_STATE, Device,
};
use prometheus::{GaugeVec, Histogram, HistogramOpts, HistogramTimer, Opts, Registry, TextEncoder};

const NAMESPACE: &str = "gardena_smart_system";

/// Numeric device attributes rendered as gauges. Keys a variant does not have
/// are skipped per device.
const FLOAT_ATTRIBUTES: &[&str] = &[
    ATTR_BATTERY_LEVEL,
    ATTR_RF_LINK_LEVEL,
    ATTR_SOIL_HUMIDITY,
    ATTR_SOIL_TEMPERATURE,
    ATTR_OPERATING_HOURS,
];

/// All exported metrics, registered on an explicit registry instead of the
/// process-wide default one. Constructed once and shared by reference.
pub struct Metrics {
    registry: Registry,
    locations_total: GaugeVec,
    endpoint_health: GaugeVec,
    endpoint_health_duration: Histogram,
    device_attribute: GaugeVec,
    device_info: GaugeVec,
}

impl Metrics {
    pub fn new() -> Result<Metrics, prometheus::Error> {
        let locations_total = GaugeVec::new(
            Opts::new("locations_total", "The number of locations").namespace(NAMESPACE),
            &["endpoint"],
        )?;
        let endpoint_health = GaugeVec::new(
            Opts::new("endpoint_health", "Indicates if a endpoint is healthy").namespace(NAMESPACE),
            &["endpoint", "addr"],
        )?;
        let endpoint_health_duration = Histogram::with_opts(
            HistogramOpts::new("endpoint_health_duration", "The duration all endpoint health checks took").namespace(NAMESPACE),
        )?;
        let device_attribute = GaugeVec::new(
            Opts::new("device_attribute", "A numeric attribute of a device").namespace(NAMESPACE),
            &["id", "name", "type", "attribute"],
        )?;
        let device_info = GaugeVec::new(
            Opts::new("device_info", "Textual attributes of a device as labels, always 1").namespace(NAMESPACE),
            &["id", "name", "type", "model_type", "battery_state", "rf_link_state", "state", "activity"],
        )?;

        let registry = Registry::new();
        registry.register(Box::new(locations_total.clone()))?;
        registry.register(Box::new(endpoint_health.clone()))?;
        registry.register(Box::new(endpoint_health_duration.clone()))?;
        registry.register(Box::new(device_attribute.clone()))?;
        registry.register(Box::new(device_info.clone()))?;

        Ok(Metrics {
            registry,
            locations_total,
            endpoint_health,
            endpoint_health_duration,
            device_attribute,
            device_info,
        })
    }

    pub fn set_locations_total(&self, endpoint: &str, count: f64) {
        self.locations_total.with_label_values(&[endpoint]).set(count);
    }

    pub fn set_endpoint_health(&self, endpoint: &str, addr: &str, up: bool) {
        self.endpoint_health.with_label_values(&[endpoint, addr]).set(if up { 1.0 } else { 0.0 });
    }

    pub fn health_check_timer(&self) -> HistogramTimer {
        self.endpoint_health_duration.start_timer()
    }

    /// Renders one `device_attribute` series per numeric attribute the device
    /// exposes and one `device_info` series carrying its textual attributes.
    pub fn export_device(&self, device: &Device) {
        let id = device.device_id();
        let name = device.str_attr(ATTR_NAME).unwrap_or("");
        let device_type = device.device_type();

        for &attribute in FLOAT_ATTRIBUTES {
            if let Ok(value) = device.float_attr(attribute) {
                self.device_attribute.with_label_values(&[id, name, device_type, attribute]).set(value);
            }
        }

        self.device_info
            .with_label_values(&[
                id,
                name,
                device_type,
                device.str_attr(ATTR_MODEL_TYPE).unwrap_or(""),
                device.str_attr(ATTR_BATTERY_STATE).unwrap_or(""),
                device.str_attr(ATTR_RF_LINK_STATE).unwrap_or(""),
                device.str_attr(ATTR_STATE).unwrap_or(""),
                device.str_attr(ATTR_ACTIVITY).unwrap_or(""),
            ])
            .set(1.0);
    }

    /// Renders the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
