//! Adjustable-value widgets.
//!
//! Every widget answers the same three calls from the host menu driver:
//!
//! - [`Adjust::render`] - describe the current state as text fields
//! - [`Adjust::scroll`] - apply a relative delta (rotary encoder, UP/DOWN)
//! - [`Adjust::click`]  - confirm; `true` means "still editing", `false`
//!   means the value was committed and the widget may be discarded
//!
//! Widgets borrow their title, texts and commit callback for `'a` and never
//! allocate, so they can live on the stack of a `no_std` UI loop.

pub mod boolean;
pub mod calendar;
pub mod date;
pub mod number;
pub mod option;
pub mod time;


pub use boolean::BoolAdjust;
pub use date::{DateAdjust, DateField};
pub use number::{NumberAdjust, Scalar};
pub use option::OptionAdjust;
pub use time::{TimeAdjust, TimeField};

use crate::config::{LABEL_CAPACITY, MAX_FIELDS};
use core::fmt::{self, Write};

/// Text buffer for one rendered field.
pub type Label = heapless::String<LABEL_CAPACITY>;

/// Capability shared by all adjusters.
pub trait Adjust {
    /// Title shown above the value.
    fn title(&self) -> &str;

    /// Describe the current state. Never mutates.
    fn render(&self) -> Render;

    /// Apply a relative scroll delta.
    fn scroll(&mut self, delta: i32);

    /// Confirm / advance. Returns `true` while the widget is still editing.
    fn click(&mut self) -> bool;
}

impl<W: Adjust + ?Sized> Adjust for &mut W {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn render(&self) -> Render {
        (**self).render()
    }

    fn scroll(&mut self, delta: i32) {
        (**self).scroll(delta)
    }

    fn click(&mut self) -> bool {
        (**self).click()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Commit callback
// ═══════════════════════════════════════════════════════════════════════════

/// Action invoked with the committed value.
///
/// `WithArg` passes its fixed argument *first*, then the value, so one
/// handler can serve several menu entries.
pub enum OnCommit<'a, T, A = ()> {
    Value(&'a mut dyn FnMut(T)),
    WithArg(A, &'a mut dyn FnMut(A, T)),
}

impl<T, A: Clone> OnCommit<'_, T, A> {
    pub fn invoke(&mut self, value: T) {
        match self {
            OnCommit::Value(f) => f(value),
            OnCommit::WithArg(arg, f) => f(arg.clone(), value),
        }
    }
}

/// Invoke an optional commit action.
pub(crate) fn commit<T, A: Clone>(action: &mut Option<OnCommit<'_, T, A>>, value: T) {
    if let Some(action) = action {
        action.invoke(value);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Render description
// ═══════════════════════════════════════════════════════════════════════════

/// Vertical reference a field is placed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    /// Top edge, horizontally centered (title bar).
    TopCenter,
    /// Screen center.
    Center,
}

/// Which edge of the text sits on the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Position hint: anchor plus a horizontal pixel offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub anchor: Anchor,
    pub dx: i32,
    pub align: HAlign,
}

impl Placement {
    pub const TITLE: Self = Self {
        anchor: Anchor::TopCenter,
        dx: 0,
        align: HAlign::Center,
    };

    pub const VALUE: Self = Self {
        anchor: Anchor::Center,
        dx: 0,
        align: HAlign::Center,
    };

    pub const fn centered(dx: i32, align: HAlign) -> Self {
        Self {
            anchor: Anchor::Center,
            dx,
            align,
        }
    }
}

/// One text region of a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    pub text: Label,
    pub placement: Placement,
    /// Drawn with inverted colors.
    pub highlighted: bool,
}

impl TextField {
    pub fn new(text: &str, placement: Placement) -> Self {
        Self {
            text: label(text),
            placement,
            highlighted: false,
        }
    }

    pub fn formatted(args: fmt::Arguments<'_>, placement: Placement) -> Self {
        let mut text = Label::new();
        let _ = Truncating::new(&mut text).write_fmt(args);
        Self {
            text,
            placement,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, on: bool) -> Self {
        self.highlighted = on;
        self
    }
}

/// Everything a renderer needs to draw one widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Render {
    /// Title bar, always drawn inverted.
    pub title: TextField,
    pub fields: heapless::Vec<TextField, MAX_FIELDS>,
}

impl Render {
    pub fn new(title: &str) -> Self {
        Self {
            title: TextField::new(title, Placement::TITLE).highlighted(true),
            fields: heapless::Vec::new(),
        }
    }

    /// Append a field; extra fields beyond `MAX_FIELDS` are dropped.
    pub fn push(&mut self, field: TextField) {
        if self.fields.push(field).is_err() {
            warn!("render: field dropped, capacity {}", MAX_FIELDS);
        }
    }

    /// Render with a single centered value.
    pub fn single(title: &str, value: TextField) -> Self {
        let mut render = Self::new(title);
        render.push(value);
        render
    }

    /// The highlighted value field, if any.
    pub fn highlighted(&self) -> Option<&TextField> {
        self.fields.iter().find(|f| f.highlighted)
    }
}

/// Copy `text` into a label, truncating at a character boundary.
pub fn label(text: &str) -> Label {
    let mut out = Label::new();
    let _ = Truncating::new(&mut out).write_str(text);
    out
}

/// `fmt::Write` into a label that pushes char by char and silently drops
/// everything after the first char that does not fit.
struct Truncating<'b> {
    out: &'b mut Label,
    full: bool,
}

impl<'b> Truncating<'b> {
    fn new(out: &'b mut Label) -> Self {
        Self { out, full: false }
    }
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.full {
                break;
            }
            self.full = self.out.push(c).is_err();
        }
        Ok(())
    }
}
