//! The four degrees of freedom of the rig and their fixed limits.

use crate::action::ActionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Legs,
    Body,
    Arms,
    Handle,
}

impl Axis {
    /// Every axis, in update order.
    pub const ALL: [Axis; 4] = [Axis::Legs, Axis::Body, Axis::Arms, Axis::Handle];

    #[must_use]
    pub const fn bounds(self) -> AxisBounds {
        match self {
            Axis::Legs | Axis::Body | Axis::Arms => LIMB_BOUNDS,
            Axis::Handle => HANDLE_BOUNDS,
        }
    }

    /// Control value driving this axis. The handle axis is driven by
    /// `handle_height`.
    #[must_use]
    pub const fn control(self, action: &ActionSnapshot) -> f64 {
        match self {
            Axis::Legs => action.legs(),
            Axis::Body => action.body(),
            Axis::Arms => action.arms(),
            Axis::Handle => action.handle_height(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Legs => "legs",
            Axis::Body => "body",
            Axis::Arms => "arms",
            Axis::Handle => "handle",
        }
    }
}

/// Position window and speed limit of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub pos_min: f64,
    pub pos_max: f64,
    /// Velocity is kept within `[-vel_max, vel_max]`.
    pub vel_max: f64,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(pos_min: f64, pos_max: f64, vel_max: f64) -> Self {
        Self {
            pos_min,
            pos_max,
            vel_max,
        }
    }
}

const LIMB_BOUNDS: AxisBounds = AxisBounds::new(0.0, 1.0, 3.0);
const HANDLE_BOUNDS: AxisBounds = AxisBounds::new(-1.0, 1.0, 4.0);

/// Limits for every axis, in [`Axis::ALL`] order.
pub static AXIS_BOUNDS: [AxisBounds; 4] = [
    Axis::Legs.bounds(),
    Axis::Body.bounds(),
    Axis::Arms.bounds(),
    Axis::Handle.bounds(),
];
