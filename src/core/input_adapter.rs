use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::input::{InputEvent, PointerPosition};

/// Adapter that turns winit window events into `InputEvent`s
///
/// Cursor positions come straight from the event payload, which winit already
/// reports relative to the drawable area.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Last known cursor position
    cursor: Option<PointerPosition>,
    /// Primary button held
    dragging: bool,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event; `None` for events the surface ignores
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::Resized(size) => Some(self.resized(*size)),
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            // The release may go to another window once focus is lost
            WindowEvent::Focused(false) => {
                self.dragging = false;
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::KeyboardInput { event, .. } => {
                Self::typed_char(event.state, event.text.as_deref()).map(InputEvent::CharTyped)
            }
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            _ => None,
        }
    }

    pub fn resized(&mut self, size: PhysicalSize<u32>) -> InputEvent {
        InputEvent::Resized {
            width: size.width,
            height: size.height,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        let pointer = PointerPosition::new(position.x, position.y);
        self.cursor = Some(pointer);
        self.dragging.then_some(InputEvent::PointerDragged(pointer))
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.dragging = true;
                self.cursor.map(InputEvent::PointerClicked)
            }
            ElementState::Released => {
                self.dragging = false;
                None
            }
        }
    }

    /// First character of the text a key press produced
    pub fn typed_char(state: ElementState, text: Option<&str>) -> Option<char> {
        if state != ElementState::Pressed {
            return None;
        }
        text?.chars().next()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cursor(&self) -> Option<PointerPosition> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: winit KeyEvent and DeviceId cannot be built outside winit, so these
    // tests drive the per-event helpers that `translate` dispatches to.

    #[test]
    fn test_new_adapter_is_idle() {
        let input = WinitInput::new();
        assert!(!input.is_dragging());
        assert_eq!(input.cursor(), None);
    }

    #[test]
    fn test_motion_without_button_is_ignored() {
        let mut input = WinitInput::new();
        assert_eq!(input.cursor_moved(PhysicalPosition::new(10.0, 20.0)), None);
        assert_eq!(input.cursor(), Some(PointerPosition::new(10.0, 20.0)));
    }

    #[test]
    fn test_click_uses_last_cursor() {
        let mut input = WinitInput::new();
        input.cursor_moved(PhysicalPosition::new(5.0, 6.0));

        assert_eq!(
            input.mouse_input(ElementState::Pressed, MouseButton::Left),
            Some(InputEvent::PointerClicked(PointerPosition::new(5.0, 6.0)))
        );
    }

    #[test]
    fn test_click_before_any_motion_is_dropped() {
        let mut input = WinitInput::new();
        assert_eq!(input.mouse_input(ElementState::Pressed, MouseButton::Left), None);
        assert!(input.is_dragging());
    }

    #[test]
    fn test_drag_until_release() {
        let mut input = WinitInput::new();
        input.cursor_moved(PhysicalPosition::new(1.0, 1.0));
        input.mouse_input(ElementState::Pressed, MouseButton::Left);

        assert_eq!(
            input.cursor_moved(PhysicalPosition::new(3.0, 4.0)),
            Some(InputEvent::PointerDragged(PointerPosition::new(3.0, 4.0)))
        );

        assert_eq!(input.mouse_input(ElementState::Released, MouseButton::Left), None);
        assert_eq!(input.cursor_moved(PhysicalPosition::new(8.0, 8.0)), None);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut input = WinitInput::new();
        input.cursor_moved(PhysicalPosition::new(1.0, 1.0));
        assert_eq!(input.mouse_input(ElementState::Pressed, MouseButton::Right), None);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(WinitInput::typed_char(ElementState::Pressed, Some("q")), Some('q'));
        assert_eq!(WinitInput::typed_char(ElementState::Released, Some("q")), None);
        assert_eq!(WinitInput::typed_char(ElementState::Pressed, None), None);
        assert_eq!(WinitInput::typed_char(ElementState::Pressed, Some("")), None);
    }

    #[test]
    fn test_focus_loss_ends_drag() {
        let mut input = WinitInput::new();
        input.cursor_moved(PhysicalPosition::new(1.0, 1.0));
        input.mouse_input(ElementState::Pressed, MouseButton::Left);

        assert_eq!(input.translate(&WindowEvent::Focused(false)), None);
        assert!(!input.is_dragging());
        assert_eq!(input.cursor_moved(PhysicalPosition::new(30.0, 40.0)), None);
    }

    #[test]
    fn test_focus_gain_is_ignored() {
        let mut input = WinitInput::new();
        assert_eq!(input.translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn test_translate_close_and_resize() {
        let mut input = WinitInput::new();
        assert_eq!(input.translate(&WindowEvent::CloseRequested), Some(InputEvent::CloseRequested));
        assert_eq!(
            input.translate(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            Some(InputEvent::Resized { width: 640, height: 480 })
        );
    }

    #[test]
    fn test_resize_passes_through() {
        let mut input = WinitInput::new();
        assert_eq!(
            input.resized(PhysicalSize::new(800, 300)),
            InputEvent::Resized { width: 800, height: 300 }
        );
    }
}
