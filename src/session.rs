//! Host-side slot for the one active widget.
//!
//! The menu driver opens a widget, forwards every [`InputEvent`] through
//! [`Session::handle`], and redraws from the returned render. Once a click
//! commits, the widget is dropped and `handle` returns `None`.

use crate::adjust::{Adjust, Render};
use crate::ui::InputEvent;

pub struct Session<W> {
    active: Option<W>,
}

impl<W> Default for Session<W> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<W: Adjust> Session<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `widget` the active one, dropping any previous widget uncommitted.
    pub fn open(&mut self, widget: W) {
        if self.active.is_some() {
            debug!("session: replacing active widget");
        }
        self.active = Some(widget);
    }

    /// Drop the active widget without committing.
    pub fn close(&mut self) -> Option<W> {
        self.active.take()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn render(&self) -> Option<Render> {
        self.active.as_ref().map(|w| w.render())
    }

    /// Forward one input event; returns the render to show next.
    pub fn handle(&mut self, event: InputEvent) -> Option<Render> {
        let Some(widget) = self.active.as_mut() else {
            trace!("session: event with no active widget");
            return None;
        };

        match event {
            InputEvent::Scroll(delta) => widget.scroll(delta),
            InputEvent::Click => {
                if !widget.click() {
                    debug!("session: committed");
                    self.active = None;
                    return None;
                }
            }
        }
        self.render()
    }
}
