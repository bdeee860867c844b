//! Numeric adjuster with optional saturating bounds.

use super::{commit, Adjust, OnCommit, Placement, Render, TextField};
use crate::error::{Error, Result};
use core::fmt;

/// Number types a [`NumberAdjust`] can edit.
pub trait Scalar: Copy + PartialOrd + fmt::Display {
    /// Default scroll multiplier.
    const ONE: Self;

    /// `self + step * delta`, saturating for integers.
    fn offset(self, step: Self, delta: i32) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ONE: Self = 1;

            fn offset(self, step: Self, delta: i32) -> Self {
                let wide = i128::from(self) + i128::from(step) * i128::from(delta);
                wide.clamp(i128::from(<$t>::MIN), i128::from(<$t>::MAX)) as $t
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ONE: Self = 1.0;

            fn offset(self, step: Self, delta: i32) -> Self {
                self + step * delta as $t
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64);
impl_scalar_float!(f32, f64);

/// Adjusts a number by `step * delta` per scroll, pinned to `min`/`max`.
pub struct NumberAdjust<'a, N, A = ()> {
    title: &'a str,
    value: N,
    step: N,
    min: Option<N>,
    max: Option<N>,
    on_commit: Option<OnCommit<'a, N, A>>,
}

impl<'a, N: Scalar> NumberAdjust<'a, N> {
    /// Fails with [`Error::InvalidBounds`] when both bounds are set and
    /// `min > max`.
    pub fn new(title: &'a str, value: N, min: Option<N>, max: Option<N>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(Error::InvalidBounds);
            }
        }
        Ok(Self {
            title,
            value,
            step: N::ONE,
            min,
            max,
            on_commit: None,
        })
    }
}

impl<'a, N: Scalar, A: Clone> NumberAdjust<'a, N, A> {
    /// Multiply every scroll delta by `step`.
    pub fn with_step(mut self, step: N) -> Self {
        self.step = step;
        self
    }

    pub fn on_commit(mut self, action: &'a mut dyn FnMut(N)) -> Self {
        self.on_commit = Some(OnCommit::Value(action));
        self
    }

    pub fn on_commit_with<B: Clone>(
        self,
        arg: B,
        action: &'a mut dyn FnMut(B, N),
    ) -> NumberAdjust<'a, N, B> {
        NumberAdjust {
            title: self.title,
            value: self.value,
            step: self.step,
            min: self.min,
            max: self.max,
            on_commit: Some(OnCommit::WithArg(arg, action)),
        }
    }

    pub fn value(&self) -> N {
        self.value
    }
}

impl<N: Scalar, A: Clone> Adjust for NumberAdjust<'_, N, A> {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self) -> Render {
        Render::single(
            self.title,
            TextField::formatted(format_args!("{}", self.value), Placement::VALUE),
        )
    }

    fn scroll(&mut self, delta: i32) {
        let candidate = self.value.offset(self.step, delta);
        self.value = match (self.min, self.max) {
            (_, Some(max)) if candidate > max => max,
            (Some(min), _) if candidate < min => min,
            _ => candidate,
        };
        trace!("number: scroll {}", delta);
    }

    fn click(&mut self) -> bool {
        debug!("number: commit");
        commit(&mut self.on_commit, self.value);
        false
    }
}
