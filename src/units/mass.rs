use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 킬로그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
    /// 미국 쇼트톤(2000 lb).
    Ton,
}

fn to_kilogram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Pound => value * 0.453_592_37,
        MassUnit::Ounce => value * 0.028_349_523_125,
        MassUnit::Ton => value * 907.184_74,
    }
}

fn from_kilogram(value_kg: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value_kg,
        MassUnit::Gram => value_kg * 1000.0,
        MassUnit::Pound => value_kg / 0.453_592_37,
        MassUnit::Ounce => value_kg / 0.028_349_523_125,
        MassUnit::Ton => value_kg / 907.184_74,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let kg = to_kilogram(value, from);
    from_kilogram(kg, to)
}

pub fn parse_mass_unit(s: &str) -> Option<MassUnit> {
    match s {
        "kilogram" => Some(MassUnit::Kilogram),
        "gram" => Some(MassUnit::Gram),
        "pound" => Some(MassUnit::Pound),
        "ounce" => Some(MassUnit::Ounce),
        "ton" => Some(MassUnit::Ton),
        _ => None,
    }
}
