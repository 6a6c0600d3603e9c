use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    /// 열화학 칼로리(4.184 J).
    Calorie,
    ElectronVolt,
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Calorie => value * 4.184,
        EnergyUnit::ElectronVolt => value * 1.602_176_634e-19,
    }
}

fn from_joule(value_j: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value_j,
        EnergyUnit::Calorie => value_j / 4.184,
        EnergyUnit::ElectronVolt => value_j / 1.602_176_634e-19,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}

pub fn parse_energy_unit(s: &str) -> Option<EnergyUnit> {
    match s {
        "joule" => Some(EnergyUnit::Joule),
        "calorie" => Some(EnergyUnit::Calorie),
        "electron_volt" => Some(EnergyUnit::ElectronVolt),
        _ => None,
    }
}
