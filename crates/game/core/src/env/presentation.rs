use crate::state::{Heading, WorldPoint};

/// Receiver of the visual commands a walker issues while moving.
///
/// Commands are fire-and-forget; nothing returned by an implementation feeds
/// back into movement.
pub trait Presentation {
    fn face_heading(&mut self, heading: Heading);

    fn set_world_position(&mut self, position: WorldPoint);
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn face_heading(&mut self, heading: Heading) {
        (**self).face_heading(heading);
    }

    fn set_world_position(&mut self, position: WorldPoint) {
        (**self).set_world_position(position);
    }
}

/// Presentation that discards every command (headless simulation).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn face_heading(&mut self, _heading: Heading) {}

    fn set_world_position(&mut self, _position: WorldPoint) {}
}
