//! Register write sequences for each sensor setting
//!
//! Sequences are plain data so they can be checked without a bus. The
//! driver takes care of bank selection, so no entry here writes
//! `REG_BANK_SEL` directly.

use crate::registers::*;
use crate::settings::{Brightness, ColorSaturation, Contrast, LightMode, Mode, SpecialEffect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegWrite {
    pub bank: Bank,
    pub reg: u8,
    /// 0xFF writes the whole register, anything else is read-modify-write
    pub mask: u8,
    pub value: u8,
}

impl RegWrite {
    pub const fn dsp(reg: u8, value: u8) -> Self {
        Self {
            bank: Bank::Dsp,
            reg,
            mask: 0xFF,
            value,
        }
    }

    pub const fn sensor(reg: u8, value: u8) -> Self {
        Self {
            bank: Bank::Sensor,
            reg,
            mask: 0xFF,
            value,
        }
    }

    pub const fn masked(self, mask: u8) -> Self {
        Self { mask, ..self }
    }

    pub const fn is_full_write(&self) -> bool {
        self.mask == 0xFF
    }

    /// Value to write given the register's current contents
    pub const fn merge(&self, current: u8) -> u8 {
        (current & !self.mask) | (self.value & self.mask)
    }
}

pub fn brightness_sequence(brightness: Brightness) -> Vec<RegWrite> {
    let level = match brightness {
        Brightness::Plus2 => 0x40,
        Brightness::Plus1 => 0x30,
        Brightness::Zero => 0x20,
        Brightness::Minus1 => 0x10,
        Brightness::Minus2 => 0x00,
    };
    vec![
        RegWrite::dsp(DSP_BPADDR, SDE_CTRL),
        RegWrite::dsp(DSP_BPDATA, 0x04),
        RegWrite::dsp(DSP_BPADDR, SDE_BRIGHTNESS),
        RegWrite::dsp(DSP_BPDATA, level),
        RegWrite::dsp(DSP_BPDATA, 0x00),
    ]
}

pub fn color_saturation_sequence(saturation: ColorSaturation) -> Vec<RegWrite> {
    let gain = match saturation {
        ColorSaturation::Plus2 => 0x68,
        ColorSaturation::Plus1 => 0x58,
        ColorSaturation::Zero => 0x48,
        ColorSaturation::Minus1 => 0x38,
        ColorSaturation::Minus2 => 0x28,
    };
    vec![
        RegWrite::dsp(DSP_BPADDR, SDE_CTRL),
        RegWrite::dsp(DSP_BPDATA, 0x02),
        RegWrite::dsp(DSP_BPADDR, SDE_SATURATION),
        // U gain, then V gain
        RegWrite::dsp(DSP_BPDATA, gain),
        RegWrite::dsp(DSP_BPDATA, gain),
    ]
}

pub fn contrast_sequence(contrast: Contrast) -> Vec<RegWrite> {
    let (gain, offset) = match contrast {
        Contrast::Plus2 => (0x28, 0x0C),
        Contrast::Plus1 => (0x24, 0x16),
        Contrast::Zero => (0x20, 0x20),
        Contrast::Minus1 => (0x1C, 0x2A),
        Contrast::Minus2 => (0x18, 0x34),
    };
    vec![
        RegWrite::dsp(DSP_BPADDR, SDE_CTRL),
        RegWrite::dsp(DSP_BPDATA, 0x04),
        RegWrite::dsp(DSP_BPADDR, SDE_CONTRAST),
        RegWrite::dsp(DSP_BPDATA, 0x20),
        RegWrite::dsp(DSP_BPDATA, gain),
        RegWrite::dsp(DSP_BPDATA, offset),
        RegWrite::dsp(DSP_BPDATA, 0x06),
    ]
}

pub fn light_mode_sequence(mode: LightMode) -> Vec<RegWrite> {
    let (r, g, b) = match mode {
        LightMode::Auto => return vec![RegWrite::dsp(DSP_AWB_CTRL, 0x00)],
        LightMode::Sunny => (0x5E, 0x41, 0x54),
        LightMode::Cloudy => (0x65, 0x41, 0x4F),
        LightMode::Office => (0x52, 0x41, 0x66),
        LightMode::Home => (0x42, 0x3F, 0x71),
    };
    vec![
        RegWrite::dsp(DSP_AWB_CTRL, AWB_MANUAL),
        RegWrite::dsp(DSP_AWB_GAIN_R, r),
        RegWrite::dsp(DSP_AWB_GAIN_G, g),
        RegWrite::dsp(DSP_AWB_GAIN_B, b),
    ]
}

pub fn special_effect_sequence(effect: SpecialEffect) -> Vec<RegWrite> {
    let (ctrl, u, v) = match effect {
        SpecialEffect::Antique => (0x18, 0x40, 0xA6),
        SpecialEffect::Bluish => (0x18, 0xA0, 0x40),
        SpecialEffect::Greenish => (0x18, 0x40, 0x40),
        SpecialEffect::Reddish => (0x18, 0x40, 0xC0),
        SpecialEffect::Bw => (0x18, 0x80, 0x80),
        SpecialEffect::Negative => (0x40, 0x80, 0x80),
        SpecialEffect::BwNegative => (0x58, 0x80, 0x80),
        SpecialEffect::Normal => (0x00, 0x80, 0x80),
    };
    vec![
        RegWrite::dsp(DSP_BPADDR, SDE_CTRL),
        RegWrite::dsp(DSP_BPDATA, ctrl),
        RegWrite::dsp(DSP_BPADDR, SDE_FIXED_UV),
        RegWrite::dsp(DSP_BPDATA, u),
        RegWrite::dsp(DSP_BPDATA, v),
    ]
}

pub fn mode_sequence(mode: Mode) -> [RegWrite; 1] {
    let value = match mode {
        Mode::Normal => 0x00,
        Mode::Standby => COM2_STANDBY,
    };
    [RegWrite::sensor(SENSOR_COM2, value).masked(COM2_STANDBY)]
}

pub fn soft_reset_write() -> RegWrite {
    RegWrite::sensor(SENSOR_COM7, COM7_SRST)
}

/// ZMOW / ZMOH / ZMHH writes for a DSP output size
///
/// Caller validates that both sizes are multiples of 4 and within range.
pub fn output_size_sequence(width: u16, height: u16) -> [RegWrite; 3] {
    let outw = width / 4;
    let outh = height / 4;
    let high = ((outw >> 8) as u8 & ZMHH_OUTW_HIGH_MASK)
        | (((outh >> 8) as u8) << 2 & ZMHH_OUTH_HIGH_MASK);
    [
        RegWrite::dsp(DSP_ZMOW, (outw & 0xFF) as u8),
        RegWrite::dsp(DSP_ZMOH, (outh & 0xFF) as u8),
        RegWrite::dsp(DSP_ZMHH, high).masked(ZMHH_OUTW_HIGH_MASK | ZMHH_OUTH_HIGH_MASK),
    ]
}
