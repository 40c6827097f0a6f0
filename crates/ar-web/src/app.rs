use crate::scene::SceneBridge;
use ar_core::{AppState, Effects};
use std::cell::RefCell;
use std::rc::Rc;

/// Handles shared by every DOM, tracker and loader callback.
#[derive(Clone)]
pub struct App {
    pub state: Rc<RefCell<AppState>>,
    pub scene: Rc<RefCell<SceneBridge>>,
}

impl App {
    pub fn new(state: AppState, scene: SceneBridge) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            scene: Rc::new(RefCell::new(scene)),
        }
    }

    /// Run one core operation, then mirror its effects onto the scene.
    pub fn dispatch(&self, op: impl FnOnce(&mut AppState) -> Effects) {
        let effects = op(&mut self.state.borrow_mut());
        self.apply(effects);
    }

    /// Mirror effects onto the scene. A panel the scene failed to build is
    /// reported back to the core, and the core's follow-up is applied too.
    pub fn apply(&self, mut effects: Effects) {
        while !effects.is_empty() {
            let failure = {
                let mut scene = self.scene.borrow_mut();
                scene.apply(&effects);
                scene.take_panel_failure()
            };
            effects = match failure {
                Some((id, message)) => self.state.borrow_mut().panel_build_failed(id, message),
                None => Effects::new(),
            };
        }
    }
}
