/*!
 * # OV2640 function driver
 *
 * OmniVision OV2640 のSCCB制御ドライバ
 *
 * ## モジュール構成
 * - `settings`: 明るさ・彩度・コントラスト・ライトモード・特殊効果の列挙型
 * - `sequence`: 各設定のレジスタ書き込みシーケンス
 * - `driver`: `embedded-hal` 1.0 ベースのドライバ本体
 * - `mock`: ホストテスト用のSCCB/ピン/ディレイのモック
 */

pub mod driver;
pub mod error;
pub mod info;
pub mod pins;
pub mod registers;
pub mod sequence;
pub mod settings;

// Mock実装（ホストビルドとテストで使用可能）
#[cfg(not(target_os = "espidf"))]
pub mod mock;

pub use driver::Ov2640;
pub use error::Error;
pub use info::{ChipInfo, CHIP_INFO};
pub use pins::NoPin;
pub use registers::Bank;
pub use sequence::RegWrite;
pub use settings::{
    Brightness, ColorSaturation, Contrast, ImageResolution, ImageSettings, LightMode, Mode,
    SettingError, SpecialEffect,
};
