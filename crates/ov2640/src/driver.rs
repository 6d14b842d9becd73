/// OV2640 camera driver
///
/// Owns the SCCB bus, the PWDN / RESETB control lines and a delay source.
/// Every register access goes through the bank cache so `0xFF` is only
/// written when the target bank actually changes.
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use log::{debug, info, warn};

use crate::error::Error;
use crate::info::{ChipInfo, CHIP_INFO};
use crate::registers::*;
use crate::sequence::{self, RegWrite};
use crate::settings::{
    Brightness, ColorSaturation, Contrast, ImageResolution, ImageSettings, LightMode, Mode,
    SpecialEffect,
};

const POWER_UP_DELAY_MS: u32 = 10;
const RESET_PULSE_MS: u32 = 10;
const SOFT_RESET_DELAY_MS: u32 = 10;

#[derive(Debug)]
pub struct Ov2640<I2C, PWDN, RST, D> {
    i2c: I2C,
    power_down: PWDN,
    reset: RST,
    delay: D,
    address: u8,
    initialized: bool,
    bank: Option<Bank>,
    settings: ImageSettings,
}

impl<I2C, PWDN, RST, D> Ov2640<I2C, PWDN, RST, D>
where
    I2C: I2c,
    PWDN: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn new(i2c: I2C, power_down: PWDN, reset: RST, delay: D) -> Self {
        Self {
            i2c,
            power_down,
            reset,
            delay,
            address: SCCB_ADDRESS,
            initialized: false,
            bank: None,
            settings: ImageSettings::default(),
        }
    }

    /// Override the 7-bit SCCB address
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn settings(&self) -> &ImageSettings {
        &self.settings
    }

    pub fn info(&self) -> ChipInfo {
        CHIP_INFO
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (I2C, PWDN, RST, D) {
        (self.i2c, self.power_down, self.reset, self.delay)
    }

    /// Power the sensor up, check its id and soft reset it
    ///
    /// Any failure leaves the handle uninitialized with PWDN driven high.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.initialized = false;
        self.bank = None;
        self.settings = ImageSettings::default();

        let (pid, ver) = match self.power_up() {
            Ok(id) => id,
            Err(e) => {
                self.power_off_quietly();
                return Err(e);
            }
        };

        self.initialized = true;
        info!("ov2640: initialized (PID=0x{:02X} VER=0x{:02X})", pid, ver);
        Ok(())
    }

    /// Put the sensor into hardware power down
    pub fn deinit(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.power_down
            .set_high()
            .map_err(|_| Error::PowerDownPin)?;
        self.initialized = false;
        self.bank = None;
        self.settings = ImageSettings::default();
        info!("ov2640: powered down");
        Ok(())
    }

    pub fn set_light_mode(&mut self, mode: LightMode) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&sequence::light_mode_sequence(mode))?;
        self.settings.light_mode = Some(mode);
        debug!("ov2640: light mode = {}", mode);
        Ok(())
    }

    pub fn set_color_saturation(
        &mut self,
        saturation: ColorSaturation,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&sequence::color_saturation_sequence(saturation))?;
        self.settings.color_saturation = Some(saturation);
        debug!("ov2640: color saturation = {}", saturation);
        Ok(())
    }

    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&sequence::brightness_sequence(brightness))?;
        self.settings.brightness = Some(brightness);
        debug!("ov2640: brightness = {}", brightness);
        Ok(())
    }

    pub fn set_contrast(&mut self, contrast: Contrast) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&sequence::contrast_sequence(contrast))?;
        self.settings.contrast = Some(contrast);
        debug!("ov2640: contrast = {}", contrast);
        Ok(())
    }

    pub fn set_special_effect(&mut self, effect: SpecialEffect) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&sequence::special_effect_sequence(effect))?;
        self.settings.special_effect = Some(effect);
        debug!("ov2640: special effect = {}", effect);
        Ok(())
    }

    /// Enter or leave soft standby (COM2 bit 4)
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&sequence::mode_sequence(mode))?;
        self.settings.mode = mode;
        debug!("ov2640: mode = {}", mode);
        Ok(())
    }

    pub fn get_mode(&mut self) -> Result<Mode, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let com2 = self.read_reg(Bank::Sensor, SENSOR_COM2)?;
        Ok(if com2 & COM2_STANDBY != 0 {
            Mode::Standby
        } else {
            Mode::Normal
        })
    }

    /// Reset every sensor and DSP register to its power-on value
    pub fn soft_reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.apply(&[sequence::soft_reset_write()])?;
        self.delay.delay_ms(SOFT_RESET_DELAY_MS);
        self.bank = None;
        self.settings = ImageSettings::default();
        debug!("ov2640: soft reset");
        Ok(())
    }

    /// (PIDH, PIDL)
    pub fn read_chip_id(&mut self) -> Result<(u8, u8), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.probe_chip_id()
    }

    pub fn read_manufacturer_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let high = self.read_reg(Bank::Sensor, SENSOR_MIDH)?;
        let low = self.read_reg(Bank::Sensor, SENSOR_MIDL)?;
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Program the DSP output (zoom) size
    pub fn set_output_size(&mut self, width: u16, height: u16) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
            return Err(Error::InvalidArgument(
                "output size must be a non-zero multiple of 4",
            ));
        }
        if width / 4 > OUTW_MAX {
            return Err(Error::InvalidArgument("output width is larger than 4092"));
        }
        if height / 4 > OUTH_MAX {
            return Err(Error::InvalidArgument("output height is larger than 2044"));
        }
        self.apply(&sequence::output_size_sequence(width, height))?;
        self.settings.output_size = Some((width, height));
        debug!("ov2640: output size = {}x{}", width, height);
        Ok(())
    }

    pub fn set_image_resolution(
        &mut self,
        resolution: ImageResolution,
    ) -> Result<(), Error<I2C::Error>> {
        let (width, height) = resolution.dimensions();
        self.set_output_size(width, height)
    }

    pub fn set_dsp_reg(&mut self, reg: u8, data: u8) -> Result<(), Error<I2C::Error>> {
        self.raw_write(Bank::Dsp, reg, data)
    }

    pub fn get_dsp_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        self.raw_read(Bank::Dsp, reg)
    }

    pub fn set_sensor_reg(&mut self, reg: u8, data: u8) -> Result<(), Error<I2C::Error>> {
        self.raw_write(Bank::Sensor, reg, data)
    }

    pub fn get_sensor_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        self.raw_read(Bank::Sensor, reg)
    }

    fn raw_write(&mut self, bank: Bank, reg: u8, data: u8) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        check_not_bank_select(reg)?;
        self.write_reg(bank, reg, data)
    }

    fn raw_read(&mut self, bank: Bank, reg: u8) -> Result<u8, Error<I2C::Error>> {
        self.ensure_initialized()?;
        check_not_bank_select(reg)?;
        self.read_reg(bank, reg)
    }

    fn ensure_initialized(&self) -> Result<(), Error<I2C::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn probe_chip_id(&mut self) -> Result<(u8, u8), Error<I2C::Error>> {
        let pid = self.read_reg(Bank::Sensor, SENSOR_PIDH)?;
        let ver = self.read_reg(Bank::Sensor, SENSOR_PIDL)?;
        Ok((pid, ver))
    }

    fn power_up(&mut self) -> Result<(u8, u8), Error<I2C::Error>> {
        self.power_down
            .set_low()
            .map_err(|_| Error::PowerDownPin)?;
        self.delay.delay_ms(POWER_UP_DELAY_MS);

        // RESETB is active low
        self.reset.set_low().map_err(|_| Error::ResetPin)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.reset.set_high().map_err(|_| Error::ResetPin)?;
        self.delay.delay_ms(RESET_PULSE_MS);

        let (pid, ver) = self.probe_chip_id()?;
        if pid != CHIP_PIDH || !CHIP_PIDL.contains(&ver) {
            warn!("ov2640: unexpected chip id PID=0x{:02X} VER=0x{:02X}", pid, ver);
            return Err(Error::InvalidChipId { pid, ver });
        }

        self.apply(&[sequence::soft_reset_write()])?;
        self.delay.delay_ms(SOFT_RESET_DELAY_MS);
        self.bank = None;
        Ok((pid, ver))
    }

    fn power_off_quietly(&mut self) {
        if self.power_down.set_high().is_err() {
            warn!("ov2640: failed to drive PWDN high after init error");
        }
    }

    fn apply(&mut self, writes: &[RegWrite]) -> Result<(), Error<I2C::Error>> {
        for write in writes {
            let value = if write.is_full_write() {
                write.value
            } else {
                let current = self.read_reg(write.bank, write.reg)?;
                write.merge(current)
            };
            self.write_reg(write.bank, write.reg, value)?;
        }
        Ok(())
    }

    fn select_bank(&mut self, bank: Bank) -> Result<(), Error<I2C::Error>> {
        if self.bank == Some(bank) {
            return Ok(());
        }
        // A failed select leaves the active bank unknown
        self.bank = None;
        self.i2c
            .write(self.address, &[REG_BANK_SEL, bank.value()])
            .map_err(Error::Bus)?;
        self.bank = Some(bank);
        Ok(())
    }

    fn write_reg(&mut self, bank: Bank, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.select_bank(bank)?;
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Error::Bus)
    }

    // SCCB has no repeated start: address phase and read are separate transfers
    fn read_reg(&mut self, bank: Bank, reg: u8) -> Result<u8, Error<I2C::Error>> {
        self.select_bank(bank)?;
        self.i2c.write(self.address, &[reg]).map_err(Error::Bus)?;
        let mut buf = [0u8; 1];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(Error::Bus)?;
        Ok(buf[0])
    }
}

fn check_not_bank_select<E>(reg: u8) -> Result<(), Error<E>> {
    if reg == REG_BANK_SEL {
        Err(Error::InvalidArgument(
            "register 0xFF selects the bank and is managed by the driver",
        ))
    } else {
        Ok(())
    }
}
