//! Pointer-ray geometry for the hover query.

use glam::{Mat4, Vec3};

/// Length-limited pointer ray in world space.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction (zero when the source transform was degenerate).
    pub dir: Vec3,
    pub max_dist: f32,
}

impl Ray {
    /// Pointer reach used by the walkthrough (world units).
    pub const DEFAULT_REACH: f32 = 5.0;

    pub fn new(origin: Vec3, dir: Vec3, max_dist: f32) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
            max_dist,
        }
    }

    /// Ray along the controller's local −Z, taken from its world transform:
    /// origin at the transform's translation, direction through the point
    /// one unit down the grip.
    pub fn from_transform(world: &Mat4, max_dist: f32) -> Self {
        let origin = world.transform_point3(Vec3::ZERO);
        let tip = world.transform_point3(Vec3::NEG_Z);
        Self::new(origin, tip - origin, max_dist)
    }
}

/// Axis-aligned collider box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Slab test.  Entry distance along `ray` if the box is hit within
    /// reach; a ray starting inside the box reports distance 0.
    pub fn ray_entry(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = 0.0_f32;
        let mut t_far = ray.max_dist;

        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.dir[axis];
            if d.abs() < 1e-8 {
                // parallel to this slab pair
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
            } else {
                let inv = 1.0 / d;
                let mut lo = (self.min[axis] - o) * inv;
                let mut hi = (self.max[axis] - o) * inv;
                if lo > hi {
                    std::mem::swap(&mut lo, &mut hi);
                }
                t_near = t_near.max(lo);
                t_far = t_far.min(hi);
                if t_near > t_far {
                    return None;
                }
            }
        }
        Some(t_near)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
