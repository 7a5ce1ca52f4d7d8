use crate::config;

const PERSPECTIVE_PX: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    pub amplitude_deg: f64,
    pub scale_on_hover: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            amplitude_deg: config::TILT_AMPLITUDE_DEG,
            scale_on_hover: config::TILT_SCALE_ON_HOVER,
        }
    }
}

/// Pointer capability of the primary input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Fine,
    Coarse,
}

impl PointerKind {
    pub fn tilt_enabled(self) -> bool {
        self == PointerKind::Fine
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Maps a pointer position, measured from the card's top-left corner, to a
    /// rotation that leans the card toward the pointer.
    pub fn from_pointer(offset_x: f64, offset_y: f64, width: f64, height: f64, cfg: TiltConfig) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Tilt {
                scale: cfg.scale_on_hover,
                ..Tilt::REST
            };
        }
        let amplitude = cfg.amplitude_deg.abs();
        let dx = (offset_x - width / 2.0) / (width / 2.0);
        let dy = (offset_y - height / 2.0) / (height / 2.0);
        Tilt {
            rotate_x: (-dy * amplitude).clamp(-amplitude, amplitude),
            rotate_y: (dx * amplitude).clamp(-amplitude, amplitude),
            scale: cfg.scale_on_hover,
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Tilt::REST
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3});",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFG: TiltConfig = TiltConfig {
        amplitude_deg: 12.0,
        scale_on_hover: 1.05,
    };

    #[test]
    fn pointer_at_centre_only_scales() {
        let tilt = Tilt::from_pointer(150.0, 200.0, 300.0, 400.0, CFG);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.scale, 1.05);
    }

    #[test]
    fn top_left_corner_leans_toward_the_pointer() {
        let tilt = Tilt::from_pointer(0.0, 0.0, 300.0, 400.0, CFG);
        // top and left edges sink toward the pointer
        assert_eq!(tilt.rotate_x, 12.0);
        assert_eq!(tilt.rotate_y, -12.0);
    }

    #[test]
    fn rotation_is_bounded_by_amplitude() {
        let tilt = Tilt::from_pointer(900.0, -500.0, 300.0, 400.0, CFG);
        assert_eq!(tilt.rotate_x, 12.0);
        assert_eq!(tilt.rotate_y, 12.0);
    }

    #[test]
    fn zero_sized_card_does_not_divide_by_zero() {
        let tilt = Tilt::from_pointer(10.0, 10.0, 0.0, 0.0, CFG);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn rest_transform_css() {
        assert!(Tilt::REST.is_rest());
        assert_eq!(
            Tilt::REST.to_css(),
            "transform: perspective(800px) rotateX(0.00deg) rotateY(0.00deg) scale(1.000);"
        );
    }

    #[test]
    fn only_fine_pointers_tilt() {
        assert!(PointerKind::Fine.tilt_enabled());
        assert!(!PointerKind::Coarse.tilt_enabled());
    }
}
