use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
}

fn to_meter_per_second(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MeterPerSecond => value,
        SpeedUnit::KilometerPerHour => value / 3.6,
        SpeedUnit::MilePerHour => value * 0.447_04,
    }
}

fn from_meter_per_second(value_mps: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MeterPerSecond => value_mps,
        SpeedUnit::KilometerPerHour => value_mps * 3.6,
        SpeedUnit::MilePerHour => value_mps / 0.447_04,
    }
}

/// 속도를 변환한다.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    let mps = to_meter_per_second(value, from);
    from_meter_per_second(mps, to)
}

pub fn parse_speed_unit(s: &str) -> Option<SpeedUnit> {
    match s {
        "meter_per_second" => Some(SpeedUnit::MeterPerSecond),
        "kilometer_per_hour" => Some(SpeedUnit::KilometerPerHour),
        "mile_per_hour" => Some(SpeedUnit::MilePerHour),
        _ => None,
    }
}
