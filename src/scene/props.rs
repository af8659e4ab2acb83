//! Interactive prop registry.
//!
//! Labeled equipment meshes live in a `hecs` world as one entity per
//! collider box; a prop with sub-meshes contributes several boxes sharing
//! one [`Label`].  The hover tracker only ever asks one question of this
//! registry: "what is the nearest labeled hit along this ray?".

use std::fmt;

use hecs::{Entity, World};
use smallvec::SmallVec;

use super::geometry::{Aabb, Ray};

/// Identifier of an interactive prop (the mesh name in the source model,
/// e.g. `"Purger"`).  Shared by every collider box the prop contributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(pub String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One axis-aligned collider box belonging to a labeled prop.
#[derive(Clone, Copy, Debug)]
pub struct Collider(pub Aabb);

/// Spawn a prop's collider boxes, all carrying the same label.
pub fn spawn_prop(world: &mut World, label: &str, boxes: &[Aabb]) -> SmallVec<[Entity; 4]> {
    boxes
        .iter()
        .map(|&b| world.spawn((Label::new(label), Collider(b))))
        .collect()
}

/// Nearest labeled hit within the ray's reach.  An empty world (assets not
/// loaded yet) is simply "no hover", never an error.
pub fn nearest_hit(world: &World, ray: &Ray) -> Option<(Label, f32)> {
    let mut best: Option<(Label, f32)> = None;
    for (_, (label, collider)) in world.query::<(&Label, &Collider)>().iter() {
        if let Some(dist) = collider.0.ray_entry(ray) {
            if best.as_ref().is_none_or(|(_, b)| dist < *b) {
                best = Some((label.clone(), dist));
            }
        }
    }
    best
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, vec3};

    fn box_at_z(z: f32) -> Aabb {
        Aabb::from_center_half(vec3(0.0, 1.0, z), Vec3::splat(0.4))
    }

    fn forward_ray() -> Ray {
        Ray::new(vec3(0.0, 1.0, 0.0), Vec3::NEG_Z, Ray::DEFAULT_REACH)
    }

    #[test]
    fn empty_world_is_no_hover() {
        let world = World::new();
        assert_eq!(nearest_hit(&world, &forward_ray()), None);
    }

    #[test]
    fn picks_nearest_of_overlapping_candidates() {
        let mut world = World::new();
        spawn_prop(&mut world, "Cold_Box", &[box_at_z(-4.0)]);
        spawn_prop(&mut world, "Purger", &[box_at_z(-2.0)]);
        let (label, dist) = nearest_hit(&world, &forward_ray()).unwrap();
        assert_eq!(label.as_str(), "Purger");
        assert!((dist - 1.6).abs() < 1e-5);
    }

    #[test]
    fn descendant_boxes_share_the_prop_label() {
        let mut world = World::new();
        let ents = spawn_prop(
            &mut world,
            "Air_Compressor",
            &[box_at_z(-2.0), box_at_z(-3.0)],
        );
        assert_eq!(ents.len(), 2);
        let (label, _) = nearest_hit(&world, &forward_ray()).unwrap();
        assert_eq!(label.as_str(), "Air_Compressor");
    }

    #[test]
    fn out_of_reach_prop_is_ignored() {
        let mut world = World::new();
        spawn_prop(&mut world, "Purger", &[box_at_z(-20.0)]);
        assert_eq!(nearest_hit(&world, &forward_ray()), None);
    }
}
