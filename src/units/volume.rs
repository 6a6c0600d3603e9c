use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 세제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    /// 미국 갤런.
    Gallon,
    CubicMeter,
    CubicInch,
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Gallon => value * 0.003_785_411_784,
        VolumeUnit::CubicMeter => value,
        VolumeUnit::CubicInch => value * 1.638_706_4e-5,
    }
}

fn from_cubic_meter(value_m3: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_m3 * 1000.0,
        VolumeUnit::Gallon => value_m3 / 0.003_785_411_784,
        VolumeUnit::CubicMeter => value_m3,
        VolumeUnit::CubicInch => value_m3 / 1.638_706_4e-5,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}

pub fn parse_volume_unit(s: &str) -> Option<VolumeUnit> {
    match s {
        "liter" => Some(VolumeUnit::Liter),
        "gallon" => Some(VolumeUnit::Gallon),
        "cubic_meter" => Some(VolumeUnit::CubicMeter),
        "cubic_inch" => Some(VolumeUnit::CubicInch),
        _ => None,
    }
}
