//! Time-of-day adjuster: hour → minute → second, same click protocol as the
//! date adjuster. Each field saturates at its wall-clock range.

use super::{commit, Adjust, HAlign, OnCommit, Placement, Render, TextField};
use crate::config::{
    HOUR_MAX, MINUTE_MAX, SECOND_MAX, TIME_HM_SEP_DX, TIME_HOUR_DX, TIME_MINUTE_DX,
    TIME_MS_SEP_DX, TIME_SECOND_DX, TIME_SEPARATOR,
};
use crate::error::{Error, Result};
use chrono::{NaiveTime, Timelike};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl TimeField {
    pub fn next(self) -> Option<Self> {
        match self {
            TimeField::Hour => Some(TimeField::Minute),
            TimeField::Minute => Some(TimeField::Second),
            TimeField::Second => None,
        }
    }
}

pub struct TimeAdjust<'a, A = ()> {
    title: &'a str,
    hour: i32,
    minute: i32,
    second: i32,
    cursor: TimeField,
    step: i32,
    min: Option<NaiveTime>,
    max: Option<NaiveTime>,
    on_commit: Option<OnCommit<'a, NaiveTime, A>>,
}

impl<'a> TimeAdjust<'a> {
    pub fn new(title: &'a str, time: NaiveTime) -> Self {
        Self {
            title,
            hour: time.hour() as i32,
            minute: time.minute() as i32,
            second: time.second() as i32,
            cursor: TimeField::Hour,
            step: 1,
            min: None,
            max: None,
            on_commit: None,
        }
    }

    /// Fails with [`Error::InvalidTime`] outside `00:00:00..=23:59:59`.
    pub fn from_hms(title: &'a str, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(Error::InvalidTime)?;
        Ok(Self::new(title, time))
    }
}

impl<'a, A: Clone> TimeAdjust<'a, A> {
    pub fn with_bounds(mut self, min: Option<NaiveTime>, max: Option<NaiveTime>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(Error::InvalidBounds);
            }
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn on_commit(mut self, action: &'a mut dyn FnMut(NaiveTime)) -> Self {
        self.on_commit = Some(OnCommit::Value(action));
        self
    }

    pub fn on_commit_with<B: Clone>(
        self,
        arg: B,
        action: &'a mut dyn FnMut(B, NaiveTime),
    ) -> TimeAdjust<'a, B> {
        TimeAdjust {
            title: self.title,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            cursor: self.cursor,
            step: self.step,
            min: self.min,
            max: self.max,
            on_commit: Some(OnCommit::WithArg(arg, action)),
        }
    }

    pub fn cursor(&self) -> TimeField {
        self.cursor
    }

    pub fn fields(&self) -> (i32, i32, i32) {
        (self.hour, self.minute, self.second)
    }

    pub fn value(&self) -> Result<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)
            .ok_or(Error::InvalidTime)
    }

    fn normalize(&mut self) {
        self.hour = self.hour.clamp(0, HOUR_MAX);
        self.minute = self.minute.clamp(0, MINUTE_MAX);
        self.second = self.second.clamp(0, SECOND_MAX);

        if let Some(min) = self.min {
            if self.fields() < hms(min) {
                (self.hour, self.minute, self.second) = hms(min);
            }
        }
        if let Some(max) = self.max {
            if self.fields() > hms(max) {
                (self.hour, self.minute, self.second) = hms(max);
            }
        }
    }

    fn field(&self, field: TimeField, value: i32, dx: i32) -> TextField {
        TextField::formatted(
            format_args!("{:02}", value),
            Placement::centered(dx, HAlign::Left),
        )
        .highlighted(self.cursor == field)
    }
}

fn hms(time: NaiveTime) -> (i32, i32, i32) {
    (time.hour() as i32, time.minute() as i32, time.second() as i32)
}

impl<A: Clone> Adjust for TimeAdjust<'_, A> {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self) -> Render {
        let mut render = Render::new(self.title);
        render.push(self.field(TimeField::Hour, self.hour, TIME_HOUR_DX));
        render.push(TextField::new(
            TIME_SEPARATOR,
            Placement::centered(TIME_HM_SEP_DX, HAlign::Left),
        ));
        render.push(self.field(TimeField::Minute, self.minute, TIME_MINUTE_DX));
        render.push(TextField::new(
            TIME_SEPARATOR,
            Placement::centered(TIME_MS_SEP_DX, HAlign::Left),
        ));
        render.push(self.field(TimeField::Second, self.second, TIME_SECOND_DX));
        render
    }

    fn scroll(&mut self, delta: i32) {
        let amount = self.step.saturating_mul(delta);
        match self.cursor {
            TimeField::Hour => self.hour = self.hour.saturating_add(amount),
            TimeField::Minute => self.minute = self.minute.saturating_add(amount),
            TimeField::Second => self.second = self.second.saturating_add(amount),
        }
        self.normalize();
        trace!(
            "time: {} {}:{}:{}",
            self.cursor,
            self.hour,
            self.minute,
            self.second
        );
    }

    fn click(&mut self) -> bool {
        if let Some(next) = self.cursor.next() {
            self.cursor = next;
            return true;
        }

        self.cursor = TimeField::Hour;
        match self.value() {
            Ok(time) => {
                debug!("time: commit {}:{}:{}", self.hour, self.minute, self.second);
                commit(&mut self.on_commit, time);
            }
            Err(e) => error!("time: cannot finalize: {}", e),
        }
        false
    }
}
