/// Static chip and driver information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub driver_version: u32,
}

pub const CHIP_INFO: ChipInfo = ChipInfo {
    chip_name: "OmniVision OV2640",
    manufacturer_name: "OmniVision",
    interface: "SCCB",
    supply_voltage_min_v: 2.5,
    supply_voltage_max_v: 3.0,
    max_current_ma: 40.0,
    temperature_min: -30.0,
    temperature_max: 70.0,
    driver_version: 1000,
};

impl ChipInfo {
    /// "1.0" style version string
    pub fn driver_version_string(&self) -> String {
        format!("{}.{}", self.driver_version / 1000, (self.driver_version % 1000) / 100)
    }
}
