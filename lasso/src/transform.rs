//! Device → data coordinate translation collaborators.

use crate::model::{DevicePoint, Point};
use serde::{Deserialize, Serialize};

pub trait CoordinateTransform {
    fn to_data(&self, device: DevicePoint) -> Point;
}

/// Device coordinates already are data coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl CoordinateTransform for Identity {
    #[inline]
    fn to_data(&self, device: DevicePoint) -> Point {
        Point::new(device.x, device.y)
    }
}

/// Linear mapping from a device-space plot rectangle onto the visible axis
/// intervals. Device y grows downwards, data y upwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    /// Plot area in device pixels: left, top, width, height.
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for AxisTransform {
    fn default() -> Self {
        AxisTransform {
            left: 0.0,
            top: 0.0,
            width: 1.0,
            height: 1.0,
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl AxisTransform {
    pub fn to_device(&self, p: Point) -> DevicePoint {
        let fx = (p.x - self.x_min) / (self.x_max - self.x_min);
        let fy = (p.y - self.y_min) / (self.y_max - self.y_min);
        DevicePoint::new(self.left + fx * self.width, self.top + (1.0 - fy) * self.height)
    }
}

impl CoordinateTransform for AxisTransform {
    fn to_data(&self, device: DevicePoint) -> Point {
        // A zero-sized viewport maps everything onto the interval start.
        let fx = if self.width != 0.0 { (device.x - self.left) / self.width } else { 0.0 };
        let fy = if self.height != 0.0 { (device.y - self.top) / self.height } else { 0.0 };
        Point::new(
            self.x_min + fx * (self.x_max - self.x_min),
            self.y_max - fy * (self.y_max - self.y_min),
        )
    }
}

impl<T: CoordinateTransform + ?Sized> CoordinateTransform for Box<T> {
    fn to_data(&self, device: DevicePoint) -> Point {
        (**self).to_data(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_transform_flips_y() {
        let t = AxisTransform {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
            x_min: 0.0,
            x_max: 10.0,
            y_min: -5.0,
            y_max: 5.0,
        };
        assert_eq!(t.to_data(DevicePoint::new(100.0, 50.0)), Point::new(0.0, 5.0));
        assert_eq!(t.to_data(DevicePoint::new(300.0, 150.0)), Point::new(10.0, -5.0));
        assert_eq!(t.to_data(DevicePoint::new(200.0, 100.0)), Point::new(5.0, 0.0));
        assert_eq!(t.to_device(Point::new(5.0, 0.0)), DevicePoint::new(200.0, 100.0));
    }

    #[test]
    fn zero_sized_viewport_does_not_divide_by_zero() {
        let t = AxisTransform { width: 0.0, height: 0.0, ..AxisTransform::default() };
        let p = t.to_data(DevicePoint::new(3.0, 3.0));
        assert!(p.is_finite());
    }
}
