use esp_idf_hal::delay::{Delay, FreeRtos};
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::ledc::{config::TimerConfig, LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use log::{error, info};

use ov2640::{Mode, NoPin, Ov2640};
use ov2640_camera_tuner::{AppConfig, VERSION};

/// OV2640 へ供給する XCLK
const XCLK_FREQUENCY_MHZ: u32 = 20;

/// 設定適用後の待機間隔
const IDLE_INTERVAL_MS: u32 = 60_000;

/// アプリケーションのメインエントリーポイント
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("OV2640 Camera Tuner v{}", VERSION);

    // 設定ファイル読み込み
    let app_config = AppConfig::load().map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
    })?;
    if app_config.debug_mode {
        log::set_max_level(log::LevelFilter::Debug);
    }

    info!("ペリフェラルを初期化しています");
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    // M5Stack Unit Cam: XCLK=GPIO27, SIOD=GPIO25, SIOC=GPIO23, RESET=GPIO15, PWDN=未接続
    let xclk_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::new()
            .frequency(XCLK_FREQUENCY_MHZ.MHz().into())
            .resolution(Resolution::Bits1),
    )?;
    let mut xclk = LedcDriver::new(peripherals.ledc.channel0, &xclk_timer, pins.gpio27)?;
    xclk.set_duty(xclk.get_max_duty() / 2)?;

    let i2c_config = I2cConfig::new().baudrate(app_config.i2c_baudrate_khz.kHz().into());
    let i2c = I2cDriver::new(peripherals.i2c0, pins.gpio25, pins.gpio23, &i2c_config)?;
    let reset = PinDriver::output(pins.gpio15)?;

    let mut camera = Ov2640::new(i2c, NoPin, reset, Delay::new_default())
        .with_address(app_config.sccb_address);

    camera.init().map_err(|e| {
        error!("カメラの初期化に失敗しました: {:?}", e);
        anyhow::anyhow!("カメラ初期化エラー: {:?}", e)
    })?;

    let chip = camera.info();
    info!(
        "{} ({}) {}V-{}V, ドライバ v{}",
        chip.chip_name,
        chip.interface,
        chip.supply_voltage_min_v,
        chip.supply_voltage_max_v,
        chip.driver_version_string()
    );
    match camera.read_manufacturer_id() {
        Ok(mid) => info!("Manufacturer ID: 0x{:04X}", mid),
        Err(e) => error!("Manufacturer ID の読み出しに失敗しました: {:?}", e),
    }

    app_config.tuning.apply(&mut camera).map_err(|e| {
        error!("画質設定の適用に失敗しました: {:?}", e);
        anyhow::anyhow!("画質設定エラー: {:?}", e)
    })?;
    info!("画質設定を適用しました");

    if app_config.standby_after_tuning {
        camera
            .set_mode(Mode::Standby)
            .map_err(|e| anyhow::anyhow!("スタンバイ移行エラー: {:?}", e))?;
        info!("センサーをスタンバイに移行しました");
    }

    // XCLK とバスを保持したまま待機
    loop {
        FreeRtos::delay_ms(IDLE_INTERVAL_MS);
    }
}
