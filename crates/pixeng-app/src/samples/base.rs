//! Empty client: opens the window and keeps it black until closed.

use pixeng_core::{Client, Frame};

#[derive(Debug, Default)]
pub struct Base;

impl Client for Base {
    fn on_update(&mut self, _frame: &mut Frame<'_>, _delta_time: f32) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use pixeng_core::headless::HeadlessBackend;
    use pixeng_core::{Engine, EngineConfig, EngineState};

    use super::*;

    #[test]
    fn keeps_running_until_quit() {
        let backend = HeadlessBackend::new().quit_after(3);
        let mut engine = Engine::create(EngineConfig::new(10, 10, 2, 2), backend, Base).unwrap();
        assert_eq!(engine.run().unwrap(), 0);
        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(engine.backend().presented_frames(), 3);
    }
}
