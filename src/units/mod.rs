//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod length;
pub mod mass;
pub mod speed;
pub mod temperature;
pub mod volume;

pub use energy::{convert_energy, parse_energy_unit, EnergyUnit};
pub use length::{convert_length, parse_length_unit, LengthUnit};
pub use mass::{convert_mass, parse_mass_unit, MassUnit};
pub use speed::{convert_speed, parse_speed_unit, SpeedUnit};
pub use temperature::{convert_temperature, parse_temperature_unit, TemperatureUnit};
pub use volume::{convert_volume, parse_volume_unit, VolumeUnit};
