use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use log::{debug, info};
use ov2640::{
    Brightness, ColorSaturation, Contrast, ImageResolution, ImageSettings, LightMode, Ov2640,
    SpecialEffect,
};

/// 起動時にカメラへ適用する画質設定
///
/// 既定値はすべてニュートラル（auto / 0 / normal）で、出力サイズは変更しません。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageTuning {
    pub light_mode: LightMode,
    pub color_saturation: ColorSaturation,
    pub brightness: Brightness,
    pub contrast: Contrast,
    pub special_effect: SpecialEffect,
    pub image_resolution: Option<ImageResolution>,
}

impl ImageTuning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_light_mode(mut self, light_mode: LightMode) -> Self {
        self.light_mode = light_mode;
        self
    }

    pub fn with_color_saturation(mut self, color_saturation: ColorSaturation) -> Self {
        self.color_saturation = color_saturation;
        self
    }

    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: Contrast) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_special_effect(mut self, special_effect: SpecialEffect) -> Self {
        self.special_effect = special_effect;
        self
    }

    pub fn with_image_resolution(mut self, image_resolution: ImageResolution) -> Self {
        self.image_resolution = Some(image_resolution);
        self
    }

    /// 設定をカメラへ適用します
    ///
    /// 適用順: ライトモード → 彩度 → 明るさ → コントラスト → エフェクト → 解像度。
    /// 途中で失敗した場合はその時点で中断し、エラーを返します。
    pub fn apply<I2C, PWDN, RST, D>(
        &self,
        camera: &mut Ov2640<I2C, PWDN, RST, D>,
    ) -> Result<(), ov2640::Error<I2C::Error>>
    where
        I2C: I2c,
        PWDN: OutputPin,
        RST: OutputPin,
        D: DelayNs,
    {
        info!(
            "画質設定を適用: light_mode={}, saturation={}, brightness={}, contrast={}, effect={}",
            self.light_mode,
            self.color_saturation,
            self.brightness,
            self.contrast,
            self.special_effect
        );

        camera.set_light_mode(self.light_mode)?;
        camera.set_color_saturation(self.color_saturation)?;
        camera.set_brightness(self.brightness)?;
        camera.set_contrast(self.contrast)?;
        camera.set_special_effect(self.special_effect)?;

        if let Some(resolution) = self.image_resolution {
            camera.set_image_resolution(resolution)?;
            let (width, height) = resolution.dimensions();
            info!("出力サイズ: {} ({}x{})", resolution, width, height);
        } else {
            debug!("出力サイズは変更しません");
        }
        Ok(())
    }

    /// カメラに記録された設定がこの内容と一致するか
    pub fn is_applied(&self, settings: &ImageSettings) -> bool {
        settings.light_mode == Some(self.light_mode)
            && settings.color_saturation == Some(self.color_saturation)
            && settings.brightness == Some(self.brightness)
            && settings.contrast == Some(self.contrast)
            && settings.special_effect == Some(self.special_effect)
            && self
                .image_resolution
                .is_none_or(|r| settings.output_size == Some(r.dimensions()))
    }
}
