//! Unit-tagged measurements.
//!
//! A [`Measurement`] pairs a magnitude with a unit tag. Each quantity kind
//! (distance, angle, velocity, weight, temperature, pressure) is its own
//! enum implementing [`Unit`], so mixing kinds is a type error while
//! conversion within a kind is a pure linear (affine for temperature)
//! transform through the kind's base unit.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::constants::{
    FEET_TO_METERS, GRAINS_TO_KG, INCHES_TO_METERS, INHG_TO_PA, KMH_TO_MPS, MMHG_TO_PA,
    MPH_TO_MPS, POUNDS_TO_KG, YARDS_TO_METERS,
};

/// Unit tag for one quantity kind.
///
/// `to_base`/`from_base` convert a magnitude between this unit and the
/// kind's base unit (meters, radians, m/s, kg, kelvin, pascal).
pub trait Unit: Copy + PartialEq + fmt::Debug {
    fn to_base(self, value: f64) -> f64;
    fn from_base(self, value: f64) -> f64;
    fn symbol(self) -> &'static str;
}

/// Distance units (base: meter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
}

impl DistanceUnit {
    fn factor(self) -> f64 {
        match self {
            DistanceUnit::Millimeter => 1e-3,
            DistanceUnit::Centimeter => 1e-2,
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Kilometer => 1e3,
            DistanceUnit::Inch => INCHES_TO_METERS,
            DistanceUnit::Foot => FEET_TO_METERS,
            DistanceUnit::Yard => YARDS_TO_METERS,
        }
    }
}

impl Unit for DistanceUnit {
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }

    fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Millimeter => "mm",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Meter => "m",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Inch => "in",
            DistanceUnit::Foot => "ft",
            DistanceUnit::Yard => "yd",
        }
    }
}

/// Angular units (base: radian)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngularUnit {
    Radian,
    MRad,
    Degree,
    MOA,
}

impl AngularUnit {
    fn factor(self) -> f64 {
        match self {
            AngularUnit::Radian => 1.0,
            AngularUnit::MRad => 1e-3,
            AngularUnit::Degree => std::f64::consts::PI / 180.0,
            // One minute of angle is 1/60 degree
            AngularUnit::MOA => std::f64::consts::PI / 180.0 / 60.0,
        }
    }
}

impl Unit for AngularUnit {
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }

    fn symbol(self) -> &'static str {
        match self {
            AngularUnit::Radian => "rad",
            AngularUnit::MRad => "mrad",
            AngularUnit::Degree => "°",
            AngularUnit::MOA => "moa",
        }
    }
}

/// Velocity units (base: meter per second)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityUnit {
    MetersPerSecond,
    KilometersPerHour,
    FeetPerSecond,
    MilesPerHour,
}

impl VelocityUnit {
    fn factor(self) -> f64 {
        match self {
            VelocityUnit::MetersPerSecond => 1.0,
            VelocityUnit::KilometersPerHour => KMH_TO_MPS,
            VelocityUnit::FeetPerSecond => FEET_TO_METERS,
            VelocityUnit::MilesPerHour => MPH_TO_MPS,
        }
    }
}

impl Unit for VelocityUnit {
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }

    fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MetersPerSecond => "m/s",
            VelocityUnit::KilometersPerHour => "km/h",
            VelocityUnit::FeetPerSecond => "ft/s",
            VelocityUnit::MilesPerHour => "mph",
        }
    }
}

/// Weight units (base: kilogram)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Grain,
    Pound,
}

impl WeightUnit {
    fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 1e-3,
            WeightUnit::Grain => GRAINS_TO_KG,
            WeightUnit::Pound => POUNDS_TO_KG,
        }
    }
}

impl Unit for WeightUnit {
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }

    fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Grain => "gr",
            WeightUnit::Pound => "lb",
        }
    }
}

/// Temperature units (base: kelvin)
///
/// Celsius and Fahrenheit conversions are affine, not purely linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl Unit for TemperatureUnit {
    fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Celsius => value - 273.15,
            TemperatureUnit::Fahrenheit => (value - 273.15) * 9.0 / 5.0 + 32.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Pressure units (base: pascal)
///
/// `HectoPascal` doubles as the millibar used on range cards (1 hPa = 1 mbar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Pascal,
    HectoPascal,
    KiloPascal,
    MillimeterOfMercury,
    InchOfMercury,
}

impl PressureUnit {
    fn factor(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::HectoPascal => 100.0,
            PressureUnit::KiloPascal => 1000.0,
            PressureUnit::MillimeterOfMercury => MMHG_TO_PA,
            PressureUnit::InchOfMercury => INHG_TO_PA,
        }
    }
}

impl Unit for PressureUnit {
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }

    fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::HectoPascal => "hPa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MillimeterOfMercury => "mmHg",
            PressureUnit::InchOfMercury => "inHg",
        }
    }
}

/// A magnitude tagged with its unit.
///
/// Immutable once constructed. Comparison and arithmetic convert through
/// the kind's base unit, so `1 m == 100 cm` holds and `2 m - 50 cm` is
/// `1.5 m` (results keep the left operand's unit).
#[derive(Debug, Clone, Copy)]
pub struct Measurement<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Measurement<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Measurement { value, unit }
    }

    /// Raw magnitude in the unit this measurement was constructed with.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Magnitude expressed in `unit`.
    pub fn in_unit(&self, unit: U) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        unit.from_base(self.unit.to_base(self.value))
    }

    /// Same quantity re-tagged in `unit`.
    pub fn to(&self, unit: U) -> Self {
        Measurement::new(self.in_unit(unit), unit)
    }

    fn base(&self) -> f64 {
        self.unit.to_base(self.value)
    }
}

impl<U: Unit> PartialEq for Measurement<U> {
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl<U: Unit> PartialOrd for Measurement<U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.base().partial_cmp(&other.base())
    }
}

impl<U: Unit> Add for Measurement<U> {
    type Output = Measurement<U>;

    fn add(self, rhs: Self) -> Self::Output {
        Measurement::new(self.value + rhs.in_unit(self.unit), self.unit)
    }
}

impl<U: Unit> Sub for Measurement<U> {
    type Output = Measurement<U>;

    fn sub(self, rhs: Self) -> Self::Output {
        Measurement::new(self.value - rhs.in_unit(self.unit), self.unit)
    }
}

impl<U: Unit> Neg for Measurement<U> {
    type Output = Measurement<U>;

    fn neg(self) -> Self::Output {
        Measurement::new(-self.value, self.unit)
    }
}

impl<U: Unit> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
