//! Option selector: cycles through a fixed list of values.

use super::{commit, Adjust, OnCommit, Placement, Render, TextField};
use crate::error::{Error, Result};
use core::fmt;

/// Picks one of `options`; scrolling wraps around in both directions.
pub struct OptionAdjust<'a, T, A = ()> {
    title: &'a str,
    options: &'a [T],
    labels: Option<&'a [&'a str]>,
    index: usize,
    on_commit: Option<OnCommit<'a, T, A>>,
}

impl<'a, T: Clone + PartialEq + fmt::Display> OptionAdjust<'a, T> {
    /// `value` must be one of `options`; `labels`, when given, must match
    /// `options` one to one.
    pub fn new(
        title: &'a str,
        value: &T,
        options: &'a [T],
        labels: Option<&'a [&'a str]>,
    ) -> Result<Self> {
        let index = options
            .iter()
            .position(|o| o == value)
            .ok_or(Error::ValueNotInOptions)?;
        if let Some(labels) = labels {
            if labels.len() != options.len() {
                return Err(Error::LabelCountMismatch);
            }
        }
        Ok(Self {
            title,
            options,
            labels,
            index,
            on_commit: None,
        })
    }
}

impl<'a, T: Clone + PartialEq + fmt::Display, A: Clone> OptionAdjust<'a, T, A> {
    pub fn on_commit(mut self, action: &'a mut dyn FnMut(T)) -> Self {
        self.on_commit = Some(OnCommit::Value(action));
        self
    }

    pub fn on_commit_with<B: Clone>(
        self,
        arg: B,
        action: &'a mut dyn FnMut(B, T),
    ) -> OptionAdjust<'a, T, B> {
        OptionAdjust {
            title: self.title,
            options: self.options,
            labels: self.labels,
            index: self.index,
            on_commit: Some(OnCommit::WithArg(arg, action)),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &T {
        &self.options[self.index]
    }
}

impl<T: Clone + PartialEq + fmt::Display, A: Clone> Adjust for OptionAdjust<'_, T, A> {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self) -> Render {
        let field = match self.labels {
            Some(labels) => TextField::new(labels[self.index], Placement::VALUE),
            None => TextField::formatted(format_args!("{}", self.value()), Placement::VALUE),
        };
        Render::single(self.title, field)
    }

    fn scroll(&mut self, delta: i32) {
        let len = self.options.len() as i64;
        self.index = (self.index as i64 + i64::from(delta)).rem_euclid(len) as usize;
        trace!("option: scroll {} -> index {}", delta, self.index);
    }

    fn click(&mut self) -> bool {
        debug!("option: commit index {}", self.index);
        let value = self.options[self.index].clone();
        commit(&mut self.on_commit, value);
        false
    }
}
