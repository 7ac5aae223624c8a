//! Debug rendering: opt-in body outlines through the debug surface.
//!
//! Call `debug_draw_bodies()` once per frame after the physics step to see
//! every body's hitbox (blue) under its gridbox (red).

use crate::body::Body;
use crate::renderer::camera::CameraTransform;
use crate::renderer::instance::DebugSurface;

/// Rebuild the debug surface from scratch with the regions of every body.
pub fn debug_draw_bodies<'a, I, C>(bodies: I, surface: &mut DebugSurface, cam: &C)
where
    I: IntoIterator<Item = &'a Body>,
    C: CameraTransform + ?Sized,
{
    surface.clear();
    for body in bodies {
        body.draw_regions(surface, cam);
    }
}
