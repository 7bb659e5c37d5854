//! Perspective projection for the particle view.
//!
//! The camera sits at `(0, 0, CAMERA_Z)` looking down −Z with +Y up.  Each
//! point is first rotated about the world Y axis by the engine's rotation,
//! then projected onto a `width × height` pixel grid with +y down.

pub const CAMERA_Z:  f32 = 8.0;
pub const FOV_Y_DEG: f32 = 45.0;
pub const NEAR:      f32 = 0.1;

/// A point on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x:     f32,
    pub y:     f32,
    /// Distance in front of the camera along the view axis.
    pub depth: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    width:  f32,
    height: f32,
    /// Pixels per world unit at depth 1.
    focal:  f32,
}

impl Projector {
    pub fn new(width: usize, height: usize) -> Self {
        let half_fov = FOV_Y_DEG.to_radians() / 2.0;
        Projector {
            width:  width as f32,
            height: height as f32,
            focal:  height as f32 / 2.0 / half_fov.tan(),
        }
    }

    pub fn focal(&self) -> f32 { self.focal }

    /// Rotate `p` about Y by `rotation` radians and project it.
    /// Points behind the near plane yield `None`; points off-screen are
    /// still returned.
    pub fn project(&self, p: [f32; 3], rotation: f32) -> Option<Projected> {
        let (sin, cos) = rotation.sin_cos();
        let x = p[0] * cos + p[2] * sin;
        let z = -p[0] * sin + p[2] * cos;
        let depth = CAMERA_Z - z;
        if depth < NEAR {
            return None;
        }
        Some(Projected {
            x: self.width  / 2.0 + x    * self.focal / depth,
            y: self.height / 2.0 - p[1] * self.focal / depth,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_lands_mid_screen() {
        let p = Projector::new(800, 600).project([0.0, 0.0, 0.0], 0.0).unwrap();
        assert_eq!((p.x, p.y, p.depth), (400.0, 300.0, CAMERA_Z));
    }

    #[test]
    fn frustum_edge_hits_screen_edge() {
        // at the origin plane the half-height visible is CAMERA_Z · tan(22.5°)
        let proj = Projector::new(640, 480);
        let half = CAMERA_Z * (FOV_Y_DEG.to_radians() / 2.0).tan();
        let top = proj.project([0.0, half, 0.0], 0.0).unwrap();
        assert!(top.y.abs() < 1e-3, "{}", top.y);
    }

    #[test]
    fn up_is_up_and_right_is_right() {
        let proj = Projector::new(100, 100);
        let p = proj.project([1.0, 1.0, 0.0], 0.0).unwrap();
        assert!(p.x > 50.0 && p.y < 50.0);
    }

    #[test]
    fn rotation_about_y_swings_x_into_depth() {
        let proj = Projector::new(100, 100);
        // +x rotated a quarter turn about Y points to −z, away from the camera
        let p = proj.project([2.0, 0.0, 0.0], std::f32::consts::FRAC_PI_2).unwrap();
        assert!((p.x - 50.0).abs() < 1e-3);
        assert!((p.depth - (CAMERA_Z + 2.0)).abs() < 1e-4);
    }

    #[test]
    fn behind_camera_is_culled() {
        let proj = Projector::new(100, 100);
        assert!(proj.project([0.0, 0.0, 9.0], 0.0).is_none());
        assert!(proj.project([0.0, 0.0, CAMERA_Z], 0.0).is_none());
        assert!(proj.project([0.0, 0.0, 7.0], 0.0).is_some());
    }
}
