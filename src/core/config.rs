use ov2640::SettingError;

use crate::core::config_validation::{
    parse_brightness, parse_color_saturation, parse_contrast, parse_i2c_baudrate_khz,
    parse_image_resolution, parse_light_mode, parse_sccb_address, parse_special_effect,
    ValidationError,
};
use crate::core::tuning::ImageTuning;

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// 画質設定は文字列で記述し、`AppConfig::load` で列挙型に変換・検証します。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("auto")]
    light_mode: &'static str,

    #[default("0")]
    color_saturation: &'static str,

    #[default("0")]
    brightness: &'static str,

    #[default("0")]
    contrast: &'static str,

    #[default("normal")]
    special_effect: &'static str,

    #[default("")] // 空の場合は出力サイズを変更しない
    image_resolution: &'static str,

    #[default(0x30)]
    sccb_address: u8,

    #[default(100)]
    i2c_baudrate_khz: u32,

    #[default(false)]
    standby_after_tuning: bool,

    #[default(false)]
    debug_mode: bool,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} の値が無効です: {source}")]
    InvalidSetting {
        field: &'static str,
        source: SettingError,
    },
    #[error("sccb_address の値が無効です (0x08-0x77): 0x{0:02X}")]
    InvalidSccbAddress(u8),
    #[error("i2c_baudrate_khz の値が無効です (10-400): {0}")]
    InvalidI2cBaudrate(u32),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 起動時に適用する画質設定
    pub tuning: ImageTuning,

    /// OV2640 の SCCB アドレス (7-bit)
    pub sccb_address: u8,

    /// SCCB (I2C) クロック（kHz）
    pub i2c_baudrate_khz: u32,

    /// 設定適用後にソフトスタンバイへ移行する
    pub standby_after_tuning: bool,

    /// デバッグモード（詳細ログ）
    pub debug_mode: bool,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        Self::from_config(&CONFIG)
    }

    fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let tuning = ImageTuning::new()
            .with_light_mode(parse_light_mode(config.light_mode).map_err(map_validation_error)?)
            .with_color_saturation(
                parse_color_saturation(config.color_saturation).map_err(map_validation_error)?,
            )
            .with_brightness(parse_brightness(config.brightness).map_err(map_validation_error)?)
            .with_contrast(parse_contrast(config.contrast).map_err(map_validation_error)?)
            .with_special_effect(
                parse_special_effect(config.special_effect).map_err(map_validation_error)?,
            );
        let tuning = match parse_image_resolution(config.image_resolution)
            .map_err(map_validation_error)?
        {
            Some(resolution) => tuning.with_image_resolution(resolution),
            None => tuning,
        };

        let sccb_address = parse_sccb_address(config.sccb_address).map_err(map_validation_error)?;
        let i2c_baudrate_khz =
            parse_i2c_baudrate_khz(config.i2c_baudrate_khz).map_err(map_validation_error)?;

        Ok(AppConfig {
            tuning,
            sccb_address,
            i2c_baudrate_khz,
            standby_after_tuning: config.standby_after_tuning,
            debug_mode: config.debug_mode,
        })
    }
}

fn map_validation_error(err: ValidationError) -> ConfigError {
    match err {
        ValidationError::InvalidSetting { field, source } => {
            ConfigError::InvalidSetting { field, source }
        }
        ValidationError::InvalidSccbAddress(v) => ConfigError::InvalidSccbAddress(v),
        ValidationError::InvalidI2cBaudrate(v) => ConfigError::InvalidI2cBaudrate(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov2640::{Brightness, Contrast, ImageResolution, LightMode, SpecialEffect};

    fn base_config() -> Config {
        Config {
            light_mode: "auto",
            color_saturation: "0",
            brightness: "0",
            contrast: "0",
            special_effect: "normal",
            image_resolution: "",
            sccb_address: 0x30,
            i2c_baudrate_khz: 100,
            standby_after_tuning: false,
            debug_mode: false,
        }
    }

    #[test]
    fn defaults_produce_neutral_tuning() {
        let config = AppConfig::from_config(&base_config()).unwrap();
        assert_eq!(config.tuning, ImageTuning::default());
        assert_eq!(config.sccb_address, 0x30);
        assert!(config.tuning.image_resolution.is_none());
    }

    #[test]
    fn settings_are_parsed_into_tuning() {
        let raw = Config {
            light_mode: "office",
            brightness: "+2",
            contrast: "-1",
            special_effect: "bw-negative",
            image_resolution: "svga",
            ..base_config()
        };
        let config = AppConfig::from_config(&raw).unwrap();
        assert_eq!(config.tuning.light_mode, LightMode::Office);
        assert_eq!(config.tuning.brightness, Brightness::Plus2);
        assert_eq!(config.tuning.contrast, Contrast::Minus1);
        assert_eq!(config.tuning.special_effect, SpecialEffect::BwNegative);
        assert_eq!(config.tuning.image_resolution, Some(ImageResolution::Svga));
    }

    #[test]
    fn invalid_setting_names_the_field() {
        let raw = Config {
            color_saturation: "+3",
            ..base_config()
        };
        let err = AppConfig::from_config(&raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                field: "color_saturation",
                ..
            }
        ));
    }

    #[test]
    fn invalid_sccb_address_is_rejected() {
        let raw = Config {
            sccb_address: 0x80,
            ..base_config()
        };
        assert!(matches!(
            AppConfig::from_config(&raw),
            Err(ConfigError::InvalidSccbAddress(0x80))
        ));
    }

    #[test]
    fn invalid_baudrate_is_rejected() {
        let raw = Config {
            i2c_baudrate_khz: 1000,
            ..base_config()
        };
        assert!(matches!(
            AppConfig::from_config(&raw),
            Err(ConfigError::InvalidI2cBaudrate(1000))
        ));
    }
}
