//! Date adjuster.
//!
//! A three-field cursor (year → month → day). Scrolling edits the field
//! under the cursor, then re-validates the whole date:
//!
//! ```text
//! year range → clamp_month → clamp_day → min/max bounds
//! ```
//!
//! The order matters: editing the year can shorten February (29 → 28) and
//! editing the month can shorten the day (31 → 30/29/28).

use super::calendar::{clamp_day, clamp_month};
use super::{commit, Adjust, HAlign, OnCommit, Placement, Render, TextField};
use crate::config::{
    DATE_DAY_DX, DATE_MD_SEP_DX, DATE_MONTH_DX, DATE_SEPARATOR, DATE_YEAR_DX, DATE_YM_SEP_DX,
    YEAR_MAX, YEAR_MIN,
};
use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Field currently receiving scroll deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    /// Next field, or `None` after the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            DateField::Year => Some(DateField::Month),
            DateField::Month => Some(DateField::Day),
            DateField::Day => None,
        }
    }
}

pub struct DateAdjust<'a, A = ()> {
    title: &'a str,
    year: i32,
    month: i32,
    day: i32,
    cursor: DateField,
    step: i32,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    on_commit: Option<OnCommit<'a, NaiveDate, A>>,
}

impl<'a> DateAdjust<'a> {
    pub fn new(title: &'a str, date: NaiveDate) -> Self {
        Self {
            title,
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
            cursor: DateField::Year,
            step: 1,
            min: None,
            max: None,
            on_commit: None,
        }
    }

    /// Build from raw fields; fails with [`Error::InvalidDate`] if they are
    /// not a real calendar date.
    pub fn from_ymd(title: &'a str, year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate)?;
        Ok(Self::new(title, date))
    }
}

impl<'a, A: Clone> DateAdjust<'a, A> {
    /// Restrict scrolling to `min..=max`. Either end may be open.
    pub fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(Error::InvalidBounds);
            }
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    /// Multiply every scroll delta by `step`.
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn on_commit(mut self, action: &'a mut dyn FnMut(NaiveDate)) -> Self {
        self.on_commit = Some(OnCommit::Value(action));
        self
    }

    pub fn on_commit_with<B: Clone>(
        self,
        arg: B,
        action: &'a mut dyn FnMut(B, NaiveDate),
    ) -> DateAdjust<'a, B> {
        DateAdjust {
            title: self.title,
            year: self.year,
            month: self.month,
            day: self.day,
            cursor: self.cursor,
            step: self.step,
            min: self.min,
            max: self.max,
            on_commit: Some(OnCommit::WithArg(arg, action)),
        }
    }

    pub fn cursor(&self) -> DateField {
        self.cursor
    }

    /// Current `(year, month, day)`.
    pub fn fields(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Finalize the current fields into a date.
    pub fn value(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .ok_or(Error::InvalidDate)
    }

    fn normalize(&mut self) {
        self.year = self.year.clamp(YEAR_MIN, YEAR_MAX);
        self.month = clamp_month(self.month);
        self.day = clamp_day(self.year, self.month, self.day);

        if let Some(min) = self.min {
            if self.fields() < ymd(min) {
                self.set(min);
            }
        }
        if let Some(max) = self.max {
            if self.fields() > ymd(max) {
                self.set(max);
            }
        }
    }

    fn set(&mut self, date: NaiveDate) {
        (self.year, self.month, self.day) = ymd(date);
    }

    fn field(&self, field: DateField, text: TextField) -> TextField {
        text.highlighted(self.cursor == field)
    }
}

fn ymd(date: NaiveDate) -> (i32, i32, i32) {
    (date.year(), date.month() as i32, date.day() as i32)
}

impl<A: Clone> Adjust for DateAdjust<'_, A> {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self) -> Render {
        let mut render = Render::new(self.title);
        render.push(self.field(
            DateField::Year,
            TextField::formatted(
                format_args!("{}", self.year),
                Placement::centered(DATE_YEAR_DX, HAlign::Right),
            ),
        ));
        render.push(TextField::new(
            DATE_SEPARATOR,
            Placement::centered(DATE_YM_SEP_DX, HAlign::Right),
        ));
        render.push(self.field(
            DateField::Month,
            TextField::formatted(
                format_args!("{:02}", self.month),
                Placement::centered(DATE_MONTH_DX, HAlign::Center),
            ),
        ));
        render.push(TextField::new(
            DATE_SEPARATOR,
            Placement::centered(DATE_MD_SEP_DX, HAlign::Left),
        ));
        render.push(self.field(
            DateField::Day,
            TextField::formatted(
                format_args!("{:02}", self.day),
                Placement::centered(DATE_DAY_DX, HAlign::Left),
            ),
        ));
        render
    }

    fn scroll(&mut self, delta: i32) {
        let amount = self.step.saturating_mul(delta);
        match self.cursor {
            DateField::Year => self.year = self.year.saturating_add(amount),
            DateField::Month => self.month = self.month.saturating_add(amount),
            DateField::Day => self.day = self.day.saturating_add(amount),
        }
        self.normalize();
        trace!(
            "date: {} {}-{}-{}",
            self.cursor,
            self.year,
            self.month,
            self.day
        );
    }

    fn click(&mut self) -> bool {
        if let Some(next) = self.cursor.next() {
            self.cursor = next;
            return true;
        }

        self.cursor = DateField::Year;
        match self.value() {
            Ok(date) => {
                debug!("date: commit {}-{}-{}", self.year, self.month, self.day);
                commit(&mut self.on_commit, date);
            }
            Err(e) => error!("date: cannot finalize: {}", e),
        }
        false
    }
}
