use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline step that produced a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Summarize,
    Translate,
    Image,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Summarize => write!(f, "summarize"),
            Stage::Translate => write!(f, "translate"),
            Stage::Image => write!(f, "image"),
        }
    }
}

/// A non-fatal fallback taken while producing a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub stage: Stage,
    /// Index of the chunk (or article) the fallback applied to.
    pub segment: usize,
    pub message: String,
}

impl Notice {
    pub fn new(stage: Stage, segment: usize, message: impl Into<String>) -> Self {
        Self {
            stage,
            segment,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}: {}", self.stage, self.segment, self.message)
    }
}

/// A value together with the fallbacks taken to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub value: T,
    pub notices: Vec<Notice>,
}

impl<T> Outcome<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            notices: Vec::new(),
        }
    }

    pub fn with_notices(value: T, notices: Vec<Notice>) -> Self {
        Self { value, notices }
    }

    pub fn is_degraded(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            notices: self.notices,
        }
    }

    /// Moves the notices into `sink` and returns the bare value.
    pub fn drain_into(self, sink: &mut Vec<Notice>) -> T {
        sink.extend(self.notices);
        self.value
    }
}
