/// Outer game loop notified of outcomes the player rules cannot resolve
/// themselves.
pub trait GameFlow {
    /// Fame dropped to zero or below. `fame` is the value after the change.
    fn game_over(&mut self, fame: i32);
}

impl<F: GameFlow + ?Sized> GameFlow for &mut F {
    fn game_over(&mut self, fame: i32) {
        (**self).game_over(fame);
    }
}

/// Flow that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullGameFlow;

impl GameFlow for NullGameFlow {
    fn game_over(&mut self, _fame: i32) {}
}
