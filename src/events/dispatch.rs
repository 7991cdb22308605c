//! Routes input events to the registered handlers

use super::handlers::{
    with_redraw, KeyPress, KeyboardHandler, MouseClick, MouseHandler, RequestRedraw,
    SpecialKeyPress, SpecialKeyboardHandler,
};

type Callback<E> = Box<dyn FnMut(E)>;

/// An input event delivered by the toolkit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Mouse(MouseClick),
    Key(KeyPress),
    SpecialKey(SpecialKeyPress),
}

/// Holds one handler per input role
///
/// Every handler is registered through `with_redraw`, so delivering an
/// event to it always requests exactly one redraw. Events for a role with
/// no handler are dropped.
pub struct EventDispatcher<R> {
    redraw: R,
    mouse: Option<Callback<MouseClick>>,
    keyboard: Option<Callback<KeyPress>>,
    special: Option<Callback<SpecialKeyPress>>,
}

impl<R> EventDispatcher<R>
where
    R: RequestRedraw + Clone + 'static,
{
    pub fn new(redraw: R) -> Self {
        Self {
            redraw,
            mouse: None,
            keyboard: None,
            special: None,
        }
    }

    pub fn set_mouse_handler<H: MouseHandler + 'static>(&mut self, mut handler: H) {
        let callback = with_redraw(
            move |click: MouseClick| MouseHandler::on_click(&mut handler, click),
            self.redraw.clone(),
        );
        self.mouse = Some(Box::new(callback));
    }

    pub fn set_keyboard_handler<H: KeyboardHandler + 'static>(&mut self, mut handler: H) {
        let callback = with_redraw(
            move |press: KeyPress| KeyboardHandler::on_press(&mut handler, press),
            self.redraw.clone(),
        );
        self.keyboard = Some(Box::new(callback));
    }

    pub fn set_special_keyboard_handler<H: SpecialKeyboardHandler + 'static>(
        &mut self,
        mut handler: H,
    ) {
        let callback = with_redraw(
            move |press: SpecialKeyPress| SpecialKeyboardHandler::on_press(&mut handler, press),
            self.redraw.clone(),
        );
        self.special = Some(Box::new(callback));
    }

    /// Deliver an event, returning whether a handler received it
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Mouse(click) => Self::deliver(&mut self.mouse, click),
            InputEvent::Key(press) => Self::deliver(&mut self.keyboard, press),
            InputEvent::SpecialKey(press) => Self::deliver(&mut self.special, press),
        }
    }

    fn deliver<E>(callback: &mut Option<Callback<E>>, event: E) -> bool {
        match callback {
            Some(callback) => {
                callback(event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handlers::{ButtonState, FlowerInput, MouseButton, SpecialKey};
    use crate::geometry::PixelPoint;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counter(Rc<Cell<usize>>);

    impl RequestRedraw for Counter {
        fn request_redraw(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    /// Keyboard handler that records what it saw
    struct Recorder(Rc<Cell<Option<char>>>);

    impl KeyboardHandler for Recorder {
        fn on_press(&mut self, press: KeyPress) {
            self.0.set(Some(press.key));
        }
    }

    /// Mouse handler that keeps the default no-op body
    struct Idle;

    impl MouseHandler for Idle {}

    fn events() -> [InputEvent; 3] {
        let position = PixelPoint::new(12, 34);
        [
            InputEvent::Mouse(MouseClick {
                button: MouseButton::Left,
                state: ButtonState::Down,
                position,
            }),
            InputEvent::Key(KeyPress { key: 'a', position }),
            InputEvent::SpecialKey(SpecialKeyPress {
                key: SpecialKey::F(1),
                position,
            }),
        ]
    }

    fn flower_dispatcher(counter: &Counter) -> EventDispatcher<Counter> {
        let mut dispatcher = EventDispatcher::new(counter.clone());
        dispatcher.set_mouse_handler(FlowerInput);
        dispatcher.set_keyboard_handler(FlowerInput);
        dispatcher.set_special_keyboard_handler(FlowerInput);
        dispatcher
    }

    #[test]
    fn test_each_event_requests_one_redraw() {
        for event in events() {
            let counter = Counter::default();
            let mut dispatcher = flower_dispatcher(&counter);

            assert!(dispatcher.dispatch(event));
            assert_eq!(counter.0.get(), 1, "after {:?}", event);
        }
    }

    #[test]
    fn test_redraws_accumulate() {
        let counter = Counter::default();
        let mut dispatcher = flower_dispatcher(&counter);

        for event in events().into_iter().chain(events()) {
            dispatcher.dispatch(event);
        }
        assert_eq!(counter.0.get(), 6);
    }

    #[test]
    fn test_handler_body_runs_before_redraw() {
        let counter = Counter::default();
        let seen = Rc::new(Cell::new(None));

        let mut dispatcher = EventDispatcher::new(counter.clone());
        dispatcher.set_keyboard_handler(Recorder(seen.clone()));
        dispatcher.dispatch(events()[1]);

        assert_eq!(seen.get(), Some('a'));
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn test_default_body_still_redraws() {
        let counter = Counter::default();
        let mut dispatcher = EventDispatcher::new(counter.clone());
        dispatcher.set_mouse_handler(Idle);

        assert!(dispatcher.dispatch(events()[0]));
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn test_unregistered_role_is_dropped() {
        let counter = Counter::default();
        let mut dispatcher = EventDispatcher::new(counter.clone());
        dispatcher.set_mouse_handler(FlowerInput);

        assert!(!dispatcher.dispatch(events()[1]));
        assert!(!dispatcher.dispatch(events()[2]));
        assert_eq!(counter.0.get(), 0);
    }
}
