//! Keyboard handling while the lightbox is open

use crate::focus::{trap_step, ModalControl, TrapStep};
use crate::lightbox::LightboxController;
use crate::view::GalleryView;

/// A key press, reduced to what the gallery cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput<'a> {
    /// `KeyboardEvent.key`, e.g. `Escape`, `ArrowLeft`, `Tab`
    pub key: &'a str,
    pub shift: bool,
}

impl<'a> KeyInput<'a> {
    pub fn new(key: &'a str, shift: bool) -> Self {
        Self { key, shift }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Previous,
    Next,
    Tab { backwards: bool },
}

impl KeyCommand {
    pub fn from_input(input: &KeyInput<'_>) -> Option<Self> {
        match input.key {
            "Escape" | "Esc" => Some(Self::Close),
            "ArrowLeft" | "Left" => Some(Self::Previous),
            "ArrowRight" | "Right" => Some(Self::Next),
            "Tab" => Some(Self::Tab {
                backwards: input.shift,
            }),
            _ => None,
        }
    }
}

impl<V: GalleryView> LightboxController<'_, V> {
    /// Handle a key press. Returns true when the caller should suppress the
    /// browser's default action.
    pub fn handle_key(&mut self, input: &KeyInput<'_>) -> bool {
        if !self.state().is_open() {
            return false;
        }
        let Some(command) = KeyCommand::from_input(input) else {
            return false;
        };

        match command {
            KeyCommand::Close => self.close(),
            KeyCommand::Previous => self.show_previous(),
            KeyCommand::Next => self.show_next(),
            KeyCommand::Tab { backwards } => self.trap_tab(backwards),
        }
        true
    }

    fn trap_tab(&mut self, backwards: bool) {
        let eligible: Vec<ModalControl> = ModalControl::TAB_ORDER
            .into_iter()
            .filter(|c| self.view().control_available(*c))
            .collect();
        let current = self.view().focused_control();

        match trap_step(&eligible, current, backwards) {
            TrapStep::Suppress => {}
            TrapStep::MoveTo(control) => self.view_mut().focus_control(control),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            KeyCommand::from_input(&KeyInput::new("Escape", false)),
            Some(KeyCommand::Close)
        );
        assert_eq!(
            KeyCommand::from_input(&KeyInput::new("ArrowLeft", true)),
            Some(KeyCommand::Previous)
        );
        assert_eq!(
            KeyCommand::from_input(&KeyInput::new("ArrowRight", false)),
            Some(KeyCommand::Next)
        );
        assert_eq!(
            KeyCommand::from_input(&KeyInput::new("Tab", true)),
            Some(KeyCommand::Tab { backwards: true })
        );
        assert_eq!(KeyCommand::from_input(&KeyInput::new("Enter", false)), None);
        assert_eq!(KeyCommand::from_input(&KeyInput::new("a", false)), None);
    }
}
