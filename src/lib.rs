/*!
 * # OV2640 Camera Tuner
 *
 * 起動時にOV2640の画質設定（ライトモード・彩度・明るさ・コントラスト・特殊効果）を適用するファームウェア
 *
 * ## モジュール構成
 * - `core`: 設定管理と画質設定の適用
 *
 * センサー制御そのものは `ov2640` クレートが担当します。
 */

pub mod core;

pub use crate::core::{AppConfig, ConfigError, ImageTuning};

/// ファームウェアのバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
