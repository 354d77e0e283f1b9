//! Wind representation for scenario trajectories.

use nalgebra::Vector3;

use crate::units::{AngularUnit, Measurement, VelocityUnit};

/// Constant wind acting over the whole shot.
///
/// Direction is measured in the horizontal plane against the line of fire:
/// 0° blows from behind the shooter toward the target, 180° straight back
/// from the target, 90° from the shooter's right.
#[derive(Debug, Clone, PartialEq)]
pub struct Wind {
    direction: Measurement<AngularUnit>,
    speed: Measurement<VelocityUnit>,
}

impl Wind {
    pub fn new(direction: Measurement<AngularUnit>, speed: Measurement<VelocityUnit>) -> Self {
        Wind { direction, speed }
    }

    pub fn direction(&self) -> Measurement<AngularUnit> {
        self.direction
    }

    pub fn speed(&self) -> Measurement<VelocityUnit> {
        self.speed
    }

    /// Tailwind component (m/s); negative when blowing against the bullet.
    pub fn headwind(&self) -> f64 {
        let rad = self.direction.in_unit(AngularUnit::Radian);
        self.speed.in_unit(VelocityUnit::MetersPerSecond) * rad.cos()
    }

    /// Crosswind component (m/s); positive when blowing from the right.
    pub fn crosswind(&self) -> f64 {
        let rad = self.direction.in_unit(AngularUnit::Radian);
        self.speed.in_unit(VelocityUnit::MetersPerSecond) * rad.sin()
    }

    /// Range-plane wind vector: x downrange, y vertical, z lateral.
    ///
    /// The vector points in the direction the wind is blowing TO, so a 90°
    /// wind carries the bullet toward negative z.
    pub fn velocity_vector(&self) -> Vector3<f64> {
        let speed_mps = self.speed.in_unit(VelocityUnit::MetersPerSecond);
        let rad = self.direction.in_unit(AngularUnit::Radian);
        Vector3::new(-speed_mps * rad.cos(), 0.0, -speed_mps * rad.sin())
    }
}
