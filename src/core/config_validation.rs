use std::str::FromStr;

use ov2640::{
    Brightness, ColorSaturation, Contrast, ImageResolution, LightMode, SettingError,
    SpecialEffect,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidSetting {
        field: &'static str,
        source: SettingError,
    },
    InvalidSccbAddress(u8),
    InvalidI2cBaudrate(u32),
}

fn parse_setting<T>(field: &'static str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = SettingError>,
{
    value
        .parse()
        .map_err(|source| ValidationError::InvalidSetting { field, source })
}

pub fn parse_light_mode(value: &str) -> Result<LightMode, ValidationError> {
    parse_setting("light_mode", value)
}

pub fn parse_color_saturation(value: &str) -> Result<ColorSaturation, ValidationError> {
    parse_setting("color_saturation", value)
}

pub fn parse_brightness(value: &str) -> Result<Brightness, ValidationError> {
    parse_setting("brightness", value)
}

pub fn parse_contrast(value: &str) -> Result<Contrast, ValidationError> {
    parse_setting("contrast", value)
}

pub fn parse_special_effect(value: &str) -> Result<SpecialEffect, ValidationError> {
    parse_setting("special_effect", value)
}

/// 空文字は「出力サイズを変更しない」
pub fn parse_image_resolution(value: &str) -> Result<Option<ImageResolution>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_setting("image_resolution", value).map(Some)
}

pub fn parse_sccb_address(value: u8) -> Result<u8, ValidationError> {
    // 7-bit address, reserved ranges excluded
    if (0x08..=0x77).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidSccbAddress(value))
    }
}

pub fn parse_i2c_baudrate_khz(value: u32) -> Result<u32, ValidationError> {
    // SCCB runs at up to 400 kHz
    if (10..=400).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidI2cBaudrate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_are_case_insensitive() {
        assert_eq!(parse_light_mode(" Sunny "), Ok(LightMode::Sunny));
        assert_eq!(parse_special_effect("BW-Negative"), Ok(SpecialEffect::BwNegative));
    }

    #[test]
    fn empty_resolution_means_unchanged() {
        assert_eq!(parse_image_resolution(""), Ok(None));
        assert_eq!(parse_image_resolution("  "), Ok(None));
        assert_eq!(parse_image_resolution("uxga"), Ok(Some(ImageResolution::Uxga)));
    }

    #[test]
    fn unknown_label_keeps_field_name() {
        let err = parse_contrast("high").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidSetting {
                field: "contrast",
                source: SettingError::UnknownName { .. }
            }
        ));
    }

    #[test]
    fn bus_parameters_are_bounded() {
        assert_eq!(parse_sccb_address(0x30), Ok(0x30));
        assert_eq!(parse_sccb_address(0x07), Err(ValidationError::InvalidSccbAddress(0x07)));
        assert_eq!(parse_i2c_baudrate_khz(400), Ok(400));
        assert_eq!(parse_i2c_baudrate_khz(0), Err(ValidationError::InvalidI2cBaudrate(0)));
    }
}
