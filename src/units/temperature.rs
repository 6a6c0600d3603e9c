use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// 온도를 서로 다른 단위로 변환한다. 6가지 쌍만 고정 수식으로 지원하며,
/// 표에 없는 쌍(동일 단위 포함)은 None을 반환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Option<f64> {
    use TemperatureUnit::*;
    let converted = match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        // 동일 단위 쌍은 표에 없으므로 변환 불가로 처리한다.
        _ => return None,
    };
    Some(converted)
}

/// 온도 단위 이름을 파싱한다. 카탈로그에 있는 정확한 이름만 허용한다.
pub fn parse_temperature_unit(s: &str) -> Option<TemperatureUnit> {
    match s {
        "celsius" => Some(TemperatureUnit::Celsius),
        "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
        "kelvin" => Some(TemperatureUnit::Kelvin),
        _ => None,
    }
}
