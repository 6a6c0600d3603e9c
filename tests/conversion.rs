//! 변환 디스패치 회귀 테스트.
use unit_converter_toolbox::conversion::{convert, ConversionError};
use unit_converter_toolbox::quantity::UnitCategory;

#[test]
fn celsius_to_fahrenheit_freezing_point() {
    let res = convert(0.0, "celsius", "fahrenheit").expect("temperature pair");
    assert!((res.value - 32.0).abs() < 1e-9, "got {}", res.value);
    assert!(res.text.contains("32.00"), "text={}", res.text);
}

#[test]
fn celsius_to_fahrenheit_boiling_point() {
    let res = convert(100.0, "celsius", "fahrenheit").expect("temperature pair");
    assert!((res.value - 212.0).abs() < 1e-9, "got {}", res.value);
    assert!(res.text.contains("212.00"), "text={}", res.text);
}

#[test]
fn kelvin_to_celsius_absolute_zero() {
    let res = convert(0.0, "kelvin", "celsius").expect("temperature pair");
    assert!((res.value + 273.15).abs() < 1e-9, "got {}", res.value);
    assert!(res.text.contains("-273.15"), "text={}", res.text);
}

#[test]
fn fahrenheit_to_kelvin_freezing_point() {
    let res = convert(32.0, "fahrenheit", "kelvin").expect("temperature pair");
    assert!((res.value - 273.15).abs() < 1e-9, "got {}", res.value);
}

#[test]
fn kelvin_to_fahrenheit_room_temperature() {
    let res = convert(300.0, "kelvin", "fahrenheit").expect("temperature pair");
    assert!((res.value - 80.33).abs() < 1e-9, "got {}", res.value);
}

#[test]
fn meter_to_foot_delegated() {
    let res = convert(1.0, "meter", "foot").expect("length pair");
    assert!((res.value - 3.28084).abs() < 1e-4, "got {}", res.value);
    assert!(res.text.contains("= 3.280840 foot"), "text={}", res.text);
}

#[test]
fn kilogram_to_meter_is_dimensional_mismatch() {
    let err = convert(1.0, "kilogram", "meter").unwrap_err();
    assert_eq!(
        err,
        ConversionError::DimensionalMismatch {
            from: UnitCategory::Mass,
            to: UnitCategory::Length,
        }
    );
}

#[test]
fn same_unit_temperature_pair_stays_invalid() {
    // 동일 온도 단위 쌍은 변환 표에 없어 그대로 실패로 처리된다.
    let err = convert(5.0, "celsius", "celsius").unwrap_err();
    assert!(
        matches!(err, ConversionError::InvalidTemperaturePair { .. }),
        "got {err:?}"
    );
}

#[test]
fn temperature_mixed_with_length_is_invalid() {
    let err = convert(5.0, "celsius", "meter").unwrap_err();
    assert!(
        matches!(err, ConversionError::InvalidTemperaturePair { .. }),
        "got {err:?}"
    );
    let err = convert(5.0, "meter", "kelvin").unwrap_err();
    assert!(
        matches!(err, ConversionError::InvalidTemperaturePair { .. }),
        "got {err:?}"
    );
}

#[test]
fn unknown_unit_is_reported_by_name() {
    let err = convert(1.0, "parsec", "meter").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));
    let err = convert(1.0, "meter", "furlong").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("furlong".to_string()));
}

#[test]
fn input_names_are_trimmed_and_case_insensitive() {
    let res = convert(1.0, " Meter ", "FOOT").expect("normalized names");
    assert!((res.value - 3.28084).abs() < 1e-4, "got {}", res.value);
}

#[test]
fn round_trip_within_every_non_temperature_category() {
    let x = 2.5;
    for cat in UnitCategory::ALL {
        if cat == UnitCategory::Temperature {
            continue;
        }
        for from in cat.units() {
            for to in cat.units() {
                let there = convert(x, from, to).expect("same-category pair");
                let back = convert(there.value, to, from).expect("reverse pair");
                let tol = 1e-9 * x.abs().max(1.0);
                assert!(
                    (back.value - x).abs() < tol,
                    "{from} -> {to} -> {from}: {x} became {}",
                    back.value
                );
            }
        }
    }
}

#[test]
fn conversion_is_deterministic() {
    let a = convert(12.34, "joule", "calorie").expect("energy pair");
    let b = convert(12.34, "joule", "calorie").expect("energy pair");
    assert_eq!(a, b);
}
