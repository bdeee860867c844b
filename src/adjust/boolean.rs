//! Boolean toggle.

use super::{commit, Adjust, OnCommit, Placement, Render, TextField};
use crate::config::{DEFAULT_FALSE_TEXT, DEFAULT_TRUE_TEXT};

/// Adjusts a `bool`; any odd scroll delta flips it.
pub struct BoolAdjust<'a, A = ()> {
    title: &'a str,
    value: bool,
    text_true: &'a str,
    text_false: &'a str,
    on_commit: Option<OnCommit<'a, bool, A>>,
}

impl<'a> BoolAdjust<'a> {
    pub fn new(title: &'a str, value: bool) -> Self {
        Self {
            title,
            value,
            text_true: DEFAULT_TRUE_TEXT,
            text_false: DEFAULT_FALSE_TEXT,
            on_commit: None,
        }
    }
}

impl<'a, A: Clone> BoolAdjust<'a, A> {
    /// Replace the texts shown for `true` / `false`.
    pub fn with_texts(mut self, text_true: &'a str, text_false: &'a str) -> Self {
        self.text_true = text_true;
        self.text_false = text_false;
        self
    }

    pub fn on_commit(mut self, action: &'a mut dyn FnMut(bool)) -> Self {
        self.on_commit = Some(OnCommit::Value(action));
        self
    }

    /// Commit with a fixed leading argument.
    pub fn on_commit_with<B: Clone>(
        self,
        arg: B,
        action: &'a mut dyn FnMut(B, bool),
    ) -> BoolAdjust<'a, B> {
        BoolAdjust {
            title: self.title,
            value: self.value,
            text_true: self.text_true,
            text_false: self.text_false,
            on_commit: Some(OnCommit::WithArg(arg, action)),
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    fn text(&self) -> &'a str {
        if self.value {
            self.text_true
        } else {
            self.text_false
        }
    }
}

impl<A: Clone> Adjust for BoolAdjust<'_, A> {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self) -> Render {
        Render::single(self.title, TextField::new(self.text(), Placement::VALUE))
    }

    fn scroll(&mut self, delta: i32) {
        if delta % 2 != 0 {
            self.value = !self.value;
        }
        trace!("bool: scroll {} -> {}", delta, self.value);
    }

    fn click(&mut self) -> bool {
        debug!("bool: commit {}", self.value);
        commit(&mut self.on_commit, self.value);
        false
    }
}
