//! Hover tracker: pointer ray → "object now being looked at".
//!
//! Raises an annotation event only on identity *transitions* into a new
//! prop, never while the hovered prop is unchanged.  Leaving all props
//! clears the tracked identifier, so re-entering the same prop later
//! re-triggers its annotation.

use hecs::World;

use crate::scene::props::{self, Label};
use crate::scene::Ray;

#[derive(Clone, Debug, Default)]
pub struct HoverState {
    current: Option<Label>,
}

impl HoverState {
    /// Prop currently under the pointer, if any.
    #[inline]
    pub fn current(&self) -> Option<&Label> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Cast `ray` against the prop registry and update the tracked
    /// identifier.  Returns the label to announce when the ray entered a
    /// new prop this frame.
    pub fn update(&mut self, world: &World, ray: &Ray) -> Option<Label> {
        match props::nearest_hit(world, ray) {
            Some((label, _dist)) => {
                let entered = self.current.as_ref() != Some(&label);
                self.current = Some(label.clone());
                entered.then_some(label)
            }
            None => {
                self.current = None;
                None
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
