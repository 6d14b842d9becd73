//! OV2640 register map (subset used by this driver)

/// 7-bit SCCB address (0x60 write / 0x61 read on the wire)
pub const SCCB_ADDRESS: u8 = 0x30;

/// Register bank selector, present in both banks
pub const REG_BANK_SEL: u8 = 0xFF;

/// Register page selected through `REG_BANK_SEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Bank {
    Dsp = 0x00,
    Sensor = 0x01,
}

impl Bank {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

// DSP bank (0xFF = 0x00)
pub const DSP_ZMOW: u8 = 0x5A;
pub const DSP_ZMOH: u8 = 0x5B;
pub const DSP_ZMHH: u8 = 0x5C;
/// SDE indirect address port
pub const DSP_BPADDR: u8 = 0x7C;
/// SDE indirect data port
pub const DSP_BPDATA: u8 = 0x7D;
pub const DSP_AWB_CTRL: u8 = 0xC7;
pub const DSP_AWB_GAIN_R: u8 = 0xCC;
pub const DSP_AWB_GAIN_G: u8 = 0xCD;
pub const DSP_AWB_GAIN_B: u8 = 0xCE;

// SDE indirect registers (written through BPADDR / BPDATA)
pub const SDE_CTRL: u8 = 0x00;
pub const SDE_SATURATION: u8 = 0x03;
pub const SDE_FIXED_UV: u8 = 0x05;
pub const SDE_CONTRAST: u8 = 0x07;
pub const SDE_BRIGHTNESS: u8 = 0x09;

// Sensor bank (0xFF = 0x01)
pub const SENSOR_COM2: u8 = 0x09;
pub const SENSOR_PIDH: u8 = 0x0A;
pub const SENSOR_PIDL: u8 = 0x0B;
pub const SENSOR_COM7: u8 = 0x12;
pub const SENSOR_MIDH: u8 = 0x1C;
pub const SENSOR_MIDL: u8 = 0x1D;

pub const COM2_STANDBY: u8 = 0x10;
pub const COM7_SRST: u8 = 0x80;
pub const AWB_MANUAL: u8 = 0x40;

pub const CHIP_PIDH: u8 = 0x26;
/// PIDL values seen on shipped silicon revisions
pub const CHIP_PIDL: [u8; 2] = [0x41, 0x42];
pub const MANUFACTURER_ID: u16 = 0x7FA2;

// ZMHH bit layout
pub const ZMHH_OUTW_HIGH_MASK: u8 = 0x03;
pub const ZMHH_OUTH_HIGH_MASK: u8 = 0x04;
pub const OUTW_MAX: u16 = 0x3FF;
pub const OUTH_MAX: u16 = 0x1FF;
