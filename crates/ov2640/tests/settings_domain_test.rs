/// Setting value domain tests
///
/// 各設定が受け付ける値が列挙された閉じた集合と完全に一致することを確認します。

use std::collections::BTreeSet;

use ov2640::{
    Brightness, ColorSaturation, Contrast, LightMode, SettingError, SpecialEffect,
};

fn accepted_codes<T: TryFrom<u8>>() -> BTreeSet<u8> {
    (0..=u8::MAX)
        .filter(|code| T::try_from(*code).is_ok())
        .collect()
}

#[test]
fn test_level_settings_accept_exactly_five_codes() {
    let expected: BTreeSet<u8> = (1..=5).collect();
    assert_eq!(accepted_codes::<Brightness>(), expected);
    assert_eq!(accepted_codes::<ColorSaturation>(), expected);
    assert_eq!(accepted_codes::<Contrast>(), expected);
}

#[test]
fn test_light_mode_accepts_exactly_five_codes() {
    let expected: BTreeSet<u8> = (1..=5).collect();
    assert_eq!(accepted_codes::<LightMode>(), expected);
}

#[test]
fn test_special_effect_accepts_exactly_eight_codes() {
    let expected: BTreeSet<u8> = (1..=8).collect();
    assert_eq!(accepted_codes::<SpecialEffect>(), expected);
}

#[test]
fn test_out_of_range_code_names_the_setting() {
    assert_eq!(
        Brightness::try_from(0),
        Err(SettingError::OutOfRange {
            kind: "brightness",
            value: 0
        })
    );
    assert_eq!(
        SpecialEffect::try_from(9),
        Err(SettingError::OutOfRange {
            kind: "special effect",
            value: 9
        })
    );
}

#[test]
fn test_errors_carry_the_setting_kind() {
    assert_eq!(Brightness::KIND, "brightness");
    assert_eq!(ColorSaturation::KIND, "color saturation");
    match "loud".parse::<Contrast>() {
        Err(SettingError::UnknownName { kind, name }) => {
            assert_eq!(kind, Contrast::KIND);
            assert_eq!(name, "loud");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(
        LightMode::try_from(6),
        Err(SettingError::OutOfRange {
            kind: LightMode::KIND,
            value: 6
        })
    );
}

#[test]
fn test_all_lists_match_the_closed_sets() {
    let levels = ["+2", "+1", "0", "-1", "-2"];
    let labels: Vec<&str> = Brightness::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(labels, levels);
    let labels: Vec<&str> = ColorSaturation::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(labels, levels);
    let labels: Vec<&str> = Contrast::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(labels, levels);

    let labels: Vec<&str> = LightMode::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(labels, ["auto", "sunny", "cloudy", "office", "home"]);

    let labels: Vec<&str> = SpecialEffect::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(
        labels,
        [
            "antique",
            "bluish",
            "greenish",
            "reddish",
            "bw",
            "negative",
            "bw-negative",
            "normal"
        ]
    );
}

#[test]
fn test_codes_round_trip_through_try_from() {
    for value in SpecialEffect::ALL {
        assert_eq!(SpecialEffect::try_from(value.code()), Ok(*value));
    }
    for value in LightMode::ALL {
        assert_eq!(LightMode::try_from(u8::from(*value)), Ok(*value));
    }
}

#[test]
fn test_labels_outside_the_sets_are_rejected() {
    for label in ["+3", "-3", "", "max", "1.0"] {
        assert!(label.parse::<Brightness>().is_err(), "{label:?}");
        assert!(label.parse::<ColorSaturation>().is_err(), "{label:?}");
        assert!(label.parse::<Contrast>().is_err(), "{label:?}");
    }
    for label in ["daylight", "tungsten", "manual"] {
        assert!(label.parse::<LightMode>().is_err(), "{label:?}");
    }
    for label in ["sepia", "solarize", "bw_negative"] {
        assert!(label.parse::<SpecialEffect>().is_err(), "{label:?}");
    }
}
