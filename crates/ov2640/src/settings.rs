/// Closed setting enumerations for the OV2640 function driver
///
/// Each enumeration keeps the integer encoding used by the sensor's
/// reference driver (first variant = 1 for the function settings) and a
/// short label used in `cfg.toml` and log output.
use std::fmt;
use std::str::FromStr;

/// Conversion failure for a setting value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingError {
    #[error("{kind} does not accept code {value}")]
    OutOfRange { kind: &'static str, value: u8 },
    #[error("unknown {kind} label: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}

macro_rules! closed_setting {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Every accepted value, in encoding order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human readable name of the setting kind
            pub const KIND: &'static str = $kind;

            pub const fn code(self) -> u8 {
                self as u8
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = SettingError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(SettingError::OutOfRange { kind: Self::KIND, value }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = SettingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| label_matches(v.label(), needle))
                    .ok_or_else(|| SettingError::UnknownName {
                        kind: Self::KIND,
                        name: needle.to_string(),
                    })
            }
        }
    };
}

// "+2" is also accepted as "2"
fn label_matches(label: &str, needle: &str) -> bool {
    label.eq_ignore_ascii_case(needle)
        || label
            .strip_prefix('+')
            .is_some_and(|unsigned| unsigned == needle)
}

closed_setting! {
    /// Overall luminance offset applied by the SDE block
    Brightness("brightness") {
        Plus2 = 1 => "+2",
        Plus1 = 2 => "+1",
        Zero = 3 => "0",
        Minus1 = 4 => "-1",
        Minus2 = 5 => "-2",
    }
}

closed_setting! {
    /// UV gain applied by the SDE block
    ColorSaturation("color saturation") {
        Plus2 = 1 => "+2",
        Plus1 = 2 => "+1",
        Zero = 3 => "0",
        Minus1 = 4 => "-1",
        Minus2 = 5 => "-2",
    }
}

closed_setting! {
    /// Luminance gain / offset pair applied by the SDE block
    Contrast("contrast") {
        Plus2 = 1 => "+2",
        Plus1 = 2 => "+1",
        Zero = 3 => "0",
        Minus1 = 4 => "-1",
        Minus2 = 5 => "-2",
    }
}

closed_setting! {
    /// White balance preset
    LightMode("light mode") {
        /// Automatic white balance
        Auto = 1 => "auto",
        Sunny = 2 => "sunny",
        Cloudy = 3 => "cloudy",
        Office = 4 => "office",
        Home = 5 => "home",
    }
}

closed_setting! {
    /// Color effect applied by the SDE block
    SpecialEffect("special effect") {
        Antique = 1 => "antique",
        Bluish = 2 => "bluish",
        Greenish = 3 => "greenish",
        Reddish = 4 => "reddish",
        /// Black and white
        Bw = 5 => "bw",
        Negative = 6 => "negative",
        /// Black and white negative
        BwNegative = 7 => "bw-negative",
        Normal = 8 => "normal",
    }
}

closed_setting! {
    /// Sensor power mode (COM2 standby bit)
    Mode("mode") {
        Normal = 0 => "normal",
        Standby = 1 => "standby",
    }
}

closed_setting! {
    /// DSP output resolution presets
    ImageResolution("image resolution") {
        Qqvga = 0 => "qqvga",
        Qcif = 1 => "qcif",
        Qvga = 2 => "qvga",
        Wqvga = 3 => "wqvga",
        Cif = 4 => "cif",
        Vga = 5 => "vga",
        Svga = 6 => "svga",
        Xga = 7 => "xga",
        Wxga = 8 => "wxga",
        Xvga = 9 => "xvga",
        WxgaPlus = 10 => "wxga+",
        Sxga = 11 => "sxga",
        Uxga = 12 => "uxga",
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Brightness::Zero
    }
}

impl Default for ColorSaturation {
    fn default() -> Self {
        ColorSaturation::Zero
    }
}

impl Default for Contrast {
    fn default() -> Self {
        Contrast::Zero
    }
}

impl Default for LightMode {
    fn default() -> Self {
        LightMode::Auto
    }
}

impl Default for SpecialEffect {
    fn default() -> Self {
        SpecialEffect::Normal
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

impl ImageResolution {
    /// (width, height) in pixels
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            ImageResolution::Qqvga => (160, 120),
            ImageResolution::Qcif => (176, 144),
            ImageResolution::Qvga => (320, 240),
            ImageResolution::Wqvga => (400, 240),
            ImageResolution::Cif => (352, 288),
            ImageResolution::Vga => (640, 480),
            ImageResolution::Svga => (800, 600),
            ImageResolution::Xga => (1024, 768),
            ImageResolution::Wxga => (1280, 800),
            ImageResolution::Xvga => (1280, 960),
            ImageResolution::WxgaPlus => (1440, 900),
            ImageResolution::Sxga => (1280, 1024),
            ImageResolution::Uxga => (1600, 1200),
        }
    }
}

/// Last values the driver successfully wrote to the sensor
///
/// The SDE registers are write-only through the indirect port, so this is
/// the only record of what is currently applied. `None` means the setting
/// has not been touched since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSettings {
    pub brightness: Option<Brightness>,
    pub color_saturation: Option<ColorSaturation>,
    pub contrast: Option<Contrast>,
    pub light_mode: Option<LightMode>,
    pub special_effect: Option<SpecialEffect>,
    pub mode: Mode,
    pub output_size: Option<(u16, u16)>,
}
