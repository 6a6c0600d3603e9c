use serde::{Deserialize, Serialize};

/// 다루는 단위 카테고리를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Mass,
    Temperature,
    Volume,
    Speed,
    Energy,
}

impl UnitCategory {
    /// 메뉴/콤보박스 표시 순서. 시작 시 한 번 정의되고 이후 변경되지 않는다.
    pub const ALL: [UnitCategory; 6] = [
        UnitCategory::Length,
        UnitCategory::Mass,
        UnitCategory::Temperature,
        UnitCategory::Volume,
        UnitCategory::Speed,
        UnitCategory::Energy,
    ];

    /// 카테고리별 선택 가능한 단위 이름 목록. 순서 고정.
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            UnitCategory::Length => {
                &["meter", "foot", "inch", "mile", "kilometer", "light_year"]
            }
            UnitCategory::Mass => &["kilogram", "gram", "pound", "ounce", "ton"],
            UnitCategory::Temperature => &["celsius", "fahrenheit", "kelvin"],
            UnitCategory::Volume => &["liter", "gallon", "cubic_meter", "cubic_inch"],
            UnitCategory::Speed => {
                &["meter_per_second", "kilometer_per_hour", "mile_per_hour"]
            }
            UnitCategory::Energy => &["joule", "calorie", "electron_volt"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Mass => "Mass",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Volume => "Volume",
            UnitCategory::Speed => "Speed",
            UnitCategory::Energy => "Energy",
        }
    }

    /// 카테고리 선택 시 UI에 채워 넣는 기본 변환 쌍.
    pub fn default_units(&self) -> (&'static str, &'static str) {
        match self {
            UnitCategory::Length => ("meter", "foot"),
            UnitCategory::Mass => ("kilogram", "pound"),
            UnitCategory::Temperature => ("celsius", "fahrenheit"),
            UnitCategory::Volume => ("liter", "gallon"),
            UnitCategory::Speed => ("meter_per_second", "kilometer_per_hour"),
            UnitCategory::Energy => ("joule", "calorie"),
        }
    }
}
