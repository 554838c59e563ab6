// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display labels for workflow states and events.
//!
//! A [`Labels`] table is built once at startup (built-in locale plus any
//! project overrides) and handed to consumers by reference. Lookups never
//! fail: an identifier without a label is displayed as itself.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::workflow::{Event, State};

/// Which namespace an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    State,
    Event,
}

/// Source of human-readable labels.
pub trait Localizer {
    /// Display string for `identifier`, or `identifier` itself if unknown.
    fn label_for<'a>(&'a self, kind: LabelKind, identifier: &'a str) -> &'a str;
}

/// Immutable label table for one locale.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    states: HashMap<String, String>,
    events: HashMap<String, String>,
}

const EN_STATES: [(State, &str); 7] = [
    (State::Open, "Open"),
    (State::WorkingOn, "Working on"),
    (State::Finished, "Finished"),
    (State::Invalid, "Invalid"),
    (State::Closed, "Closed"),
    (State::Ignored, "Ignored"),
    (State::Reopened, "Reopened"),
];

const EN_EVENTS: [(Event, &str); 7] = [
    (Event::WorkOn, "Work on it"),
    (Event::MarkInvalid, "Mark invalid"),
    (Event::Ignore, "Ignore"),
    (Event::Close, "Close"),
    (Event::MarkFinished, "Mark finished"),
    (Event::Continue, "Continue"),
    (Event::Reopen, "Reopen"),
];

const ZH_STATES: [(State, &str); 7] = [
    (State::Open, "待处理"),
    (State::WorkingOn, "处理中"),
    (State::Finished, "已完成"),
    (State::Invalid, "无效"),
    (State::Closed, "已关闭"),
    (State::Ignored, "已忽略"),
    (State::Reopened, "重新打开"),
];

const ZH_EVENTS: [(Event, &str); 7] = [
    (Event::WorkOn, "开始处理"),
    (Event::MarkInvalid, "标记为无效"),
    (Event::Ignore, "忽略"),
    (Event::Close, "关闭"),
    (Event::MarkFinished, "标记为完成"),
    (Event::Continue, "继续处理"),
    (Event::Reopen, "重新打开"),
];

impl Labels {
    /// An empty table: every identifier displays as itself.
    pub fn empty() -> Self {
        Labels::default()
    }

    pub fn english() -> Self {
        Self::from_tables(&EN_STATES, &EN_EVENTS)
    }

    pub fn chinese() -> Self {
        Self::from_tables(&ZH_STATES, &ZH_EVENTS)
    }

    /// Built-in table for a locale tag (`en`, `zh-CN`).
    pub fn for_locale(locale: &str) -> Result<Self> {
        match locale {
            "en" | "en-US" => Ok(Self::english()),
            "zh" | "zh-CN" => Ok(Self::chinese()),
            _ => Err(Error::UnknownLocale(locale.to_string())),
        }
    }

    fn from_tables(states: &[(State, &str)], events: &[(Event, &str)]) -> Self {
        Labels {
            states: states
                .iter()
                .map(|(s, l)| (s.as_str().to_string(), l.to_string()))
                .collect(),
            events: events
                .iter()
                .map(|(e, l)| (e.as_str().to_string(), l.to_string()))
                .collect(),
        }
    }

    /// Replace or add labels of one kind.
    ///
    /// Identifiers are checked against the workflow so a typo in a config
    /// file is reported instead of silently ignored.
    pub fn with_overrides<I, K, V>(mut self, kind: LabelKind, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            let key = key.into();
            match kind {
                LabelKind::State => {
                    key.parse::<State>()?;
                    self.states.insert(key, value.into());
                }
                LabelKind::Event => {
                    key.parse::<Event>()?;
                    self.events.insert(key, value.into());
                }
            }
        }
        Ok(self)
    }

    fn table(&self, kind: LabelKind) -> &HashMap<String, String> {
        match kind {
            LabelKind::State => &self.states,
            LabelKind::Event => &self.events,
        }
    }
}

impl Localizer for Labels {
    fn label_for<'a>(&'a self, kind: LabelKind, identifier: &'a str) -> &'a str {
        self.table(kind)
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier)
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
