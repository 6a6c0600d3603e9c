use crate::quantity::UnitCategory;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 온도 변환 표에 없는 쌍(동일 단위, 온도-비온도 혼합 포함)
    InvalidTemperaturePair { from: String, to: String },
    /// 서로 다른 차원의 단위 간 변환 시도
    DimensionalMismatch { from: UnitCategory, to: UnitCategory },
    /// 카탈로그에 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidTemperaturePair { from, to } => {
                write!(f, "유효하지 않은 온도 변환: {from} → {to}")
            }
            ConversionError::DimensionalMismatch { from, to } => {
                write!(
                    f,
                    "차원이 호환되지 않는 변환: {} → {}",
                    from.label(),
                    to.label()
                )
            }
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 변환 성공 결과. 수치 값과 표시용 문자열을 함께 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub text: String,
}

/// 카탈로그 단위 이름을 (카테고리, 단위)로 해석한 결과. 온도는 포함하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ResolvedUnit {
    Length(LengthUnit),
    Mass(MassUnit),
    Volume(VolumeUnit),
    Speed(SpeedUnit),
    Energy(EnergyUnit),
}

impl ResolvedUnit {
    fn category(&self) -> UnitCategory {
        match self {
            ResolvedUnit::Length(_) => UnitCategory::Length,
            ResolvedUnit::Mass(_) => UnitCategory::Mass,
            ResolvedUnit::Volume(_) => UnitCategory::Volume,
            ResolvedUnit::Speed(_) => UnitCategory::Speed,
            ResolvedUnit::Energy(_) => UnitCategory::Energy,
        }
    }
}

fn resolve_unit(s: &str) -> Option<ResolvedUnit> {
    parse_length_unit(s)
        .map(ResolvedUnit::Length)
        .or_else(|| parse_mass_unit(s).map(ResolvedUnit::Mass))
        .or_else(|| parse_volume_unit(s).map(ResolvedUnit::Volume))
        .or_else(|| parse_speed_unit(s).map(ResolvedUnit::Speed))
        .or_else(|| parse_energy_unit(s).map(ResolvedUnit::Energy))
}

/// 단위 이름이 속한 카테고리를 돌려준다. 카탈로그 밖 이름은 None.
pub fn unit_category(name: &str) -> Option<UnitCategory> {
    let s = name.trim().to_lowercase();
    if parse_temperature_unit(&s).is_some() {
        return Some(UnitCategory::Temperature);
    }
    resolve_unit(&s).map(|u| u.category())
}

fn convert_resolved(
    value: f64,
    from: ResolvedUnit,
    to: ResolvedUnit,
) -> Result<f64, ConversionError> {
    match (from, to) {
        (ResolvedUnit::Length(f), ResolvedUnit::Length(t)) => Ok(convert_length(value, f, t)),
        (ResolvedUnit::Mass(f), ResolvedUnit::Mass(t)) => Ok(convert_mass(value, f, t)),
        (ResolvedUnit::Volume(f), ResolvedUnit::Volume(t)) => Ok(convert_volume(value, f, t)),
        (ResolvedUnit::Speed(f), ResolvedUnit::Speed(t)) => Ok(convert_speed(value, f, t)),
        (ResolvedUnit::Energy(f), ResolvedUnit::Energy(t)) => Ok(convert_energy(value, f, t)),
        _ => Err(ConversionError::DimensionalMismatch {
            from: from.category(),
            to: to.category(),
        }),
    }
}

/// 값과 단위 이름 두 개를 받아 변환한다.
///
/// 어느 한쪽 이름이 온도 단위(celsius/fahrenheit/kelvin)이면 고정 수식 표로
/// 처리하고, 그 외에는 카탈로그에서 단위를 해석해 기준 단위 경유로 환산한다.
/// 순수 함수이며 입출력 외의 상태를 갖지 않는다.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError> {
    let from = from_unit.trim().to_lowercase();
    let to = to_unit.trim().to_lowercase();

    let t_from = parse_temperature_unit(&from);
    let t_to = parse_temperature_unit(&to);
    if t_from.is_some() || t_to.is_some() {
        let result = match (t_from, t_to) {
            (Some(f), Some(t)) => convert_temperature(value, f, t),
            _ => None,
        }
        .ok_or_else(|| ConversionError::InvalidTemperaturePair {
            from: from.clone(),
            to: to.clone(),
        })?;
        return Ok(Conversion {
            value: result,
            text: format!("{value} {from} = {result:.2} {to}"),
        });
    }

    let from_resolved =
        resolve_unit(&from).ok_or_else(|| ConversionError::UnknownUnit(from.clone()))?;
    let to_resolved = resolve_unit(&to).ok_or_else(|| ConversionError::UnknownUnit(to.clone()))?;
    let result = convert_resolved(value, from_resolved, to_resolved)?;
    Ok(Conversion {
        value: result,
        text: format!("{value} {from} = {result:.6} {to}"),
    })
}
