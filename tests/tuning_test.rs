/// ImageTuning integration tests
///
/// MockSccb 上で初期化したカメラに画質設定を適用し、書き込み順序と中断動作を確認します。

use ov2640::mock::{MockBusError, MockDelay, MockPin, MockSccb};
use ov2640::registers::*;
use ov2640::sequence::{
    brightness_sequence, color_saturation_sequence, contrast_sequence, light_mode_sequence,
    special_effect_sequence,
};
use ov2640::{
    Bank, Brightness, ColorSaturation, Contrast, Error, ImageResolution, LightMode, Ov2640,
    RegWrite, SpecialEffect,
};
use ov2640_camera_tuner::ImageTuning;

type MockCamera = Ov2640<MockSccb, MockPin, MockPin, MockDelay>;

fn initialized_camera() -> (MockCamera, MockSccb) {
    let bus = MockSccb::new();
    let mut camera = Ov2640::new(bus.clone(), MockPin::new(), MockPin::new(), MockDelay::new());
    camera.init().unwrap();
    bus.clear_log();
    (camera, bus)
}

fn pairs(writes: &[RegWrite]) -> Vec<(u8, u8)> {
    writes.iter().map(|w| (w.reg, w.value)).collect()
}

fn expected_writes(tuning: &ImageTuning) -> Vec<(u8, u8)> {
    let mut expected = Vec::new();
    expected.extend(pairs(&light_mode_sequence(tuning.light_mode)));
    expected.extend(pairs(&color_saturation_sequence(tuning.color_saturation)));
    expected.extend(pairs(&brightness_sequence(tuning.brightness)));
    expected.extend(pairs(&contrast_sequence(tuning.contrast)));
    expected.extend(pairs(&special_effect_sequence(tuning.special_effect)));
    expected
}

#[test]
fn test_default_tuning_writes_neutral_values_in_order() {
    let (mut camera, bus) = initialized_camera();
    let tuning = ImageTuning::default();

    tuning.apply(&mut camera).unwrap();

    let writes = bus.writes_in(Bank::Dsp);
    assert_eq!(writes, expected_writes(&tuning));
    // ライトモード(auto)が最初、通常エフェクトが最後
    assert_eq!(writes.first(), Some(&(DSP_AWB_CTRL, 0x00)));
    assert_eq!(&writes[writes.len() - 2..], &[(DSP_BPDATA, 0x80), (DSP_BPDATA, 0x80)]);
    assert!(bus.writes_in(Bank::Sensor).is_empty());
    assert!(tuning.is_applied(camera.settings()));
}

#[test]
fn test_custom_tuning_is_applied() {
    let (mut camera, bus) = initialized_camera();
    let tuning = ImageTuning::new()
        .with_light_mode(LightMode::Home)
        .with_color_saturation(ColorSaturation::Minus2)
        .with_brightness(Brightness::Plus1)
        .with_contrast(Contrast::Plus2)
        .with_special_effect(SpecialEffect::Reddish);

    tuning.apply(&mut camera).unwrap();

    assert_eq!(bus.writes_in(Bank::Dsp), expected_writes(&tuning));
    assert_eq!(bus.register(Bank::Dsp, DSP_AWB_GAIN_B), 0x71);
    // すべてDSPバンクなのでバンク選択は1回だけ
    assert_eq!(bus.bank_selects(), 1);
    assert!(tuning.is_applied(camera.settings()));
}

#[test]
fn test_resolution_is_applied_last() {
    let (mut camera, bus) = initialized_camera();
    let tuning = ImageTuning::new().with_image_resolution(ImageResolution::Svga);

    tuning.apply(&mut camera).unwrap();

    let writes = bus.writes_in(Bank::Dsp);
    let tail = &writes[writes.len() - 3..];
    // 800 / 4 = 0xC8, 600 / 4 = 0x96
    assert_eq!(tail, &[(DSP_ZMOW, 0xC8), (DSP_ZMOH, 0x96), (DSP_ZMHH, 0x00)]);
    assert_eq!(camera.settings().output_size, Some((800, 600)));
    assert!(tuning.is_applied(camera.settings()));
}

#[test]
fn test_resolution_is_skipped_when_unset() {
    let (mut camera, bus) = initialized_camera();

    ImageTuning::default().apply(&mut camera).unwrap();

    assert!(bus
        .writes_in(Bank::Dsp)
        .iter()
        .all(|(reg, _)| ![DSP_ZMOW, DSP_ZMOH, DSP_ZMHH].contains(reg)));
    assert_eq!(camera.settings().output_size, None);
}

#[test]
fn test_failure_aborts_remaining_settings() {
    let (mut camera, bus) = initialized_camera();
    // バンク選択(1) + ライトモード(1) + 彩度(5) の後で失敗させる
    bus.fail_after_writes(7);

    let result = ImageTuning::new()
        .with_brightness(Brightness::Minus1)
        .apply(&mut camera);

    assert!(matches!(result, Err(Error::Bus(MockBusError::Simulated))));
    let settings = camera.settings();
    assert_eq!(settings.light_mode, Some(LightMode::Auto));
    assert_eq!(settings.color_saturation, Some(ColorSaturation::Zero));
    assert_eq!(settings.brightness, None);
    assert_eq!(settings.contrast, None);
    assert_eq!(settings.special_effect, None);
    assert_eq!(bus.writes().len(), 6);
}

#[test]
fn test_tuning_requires_initialized_camera() {
    let bus = MockSccb::new();
    let mut camera = Ov2640::new(bus.clone(), MockPin::new(), MockPin::new(), MockDelay::new());

    let result = ImageTuning::default().apply(&mut camera);

    assert!(matches!(result, Err(Error::NotInitialized)));
    assert!(bus.writes().is_empty());
    assert_eq!(bus.bank_selects(), 0);
}
