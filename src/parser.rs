//! Title parsing
//!
//! Task titles carry their type in a prefix convention: `H CHEM FARABAUGH8.1-8.3`
//! is an assignment, `5 bio homework` a countdown with 5 days left, `1* call
//! hershey motel` a priority task. [`parse_title`] turns a raw title into a
//! [`TaskDescriptor`], trying each rule in a fixed order and falling back to
//! `Regular` when nothing matches. It never fails.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Assignment category carried in the title prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AssignmentType {
    /// Homework due before class
    H,
    /// Homework due tonight
    #[serde(rename = "HTN")]
    Htn,
    /// Quiz or test
    Q,
}

impl AssignmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::H => "H",
            AssignmentType::Htn => "HTN",
            AssignmentType::Q => "Q",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "H" => Some(AssignmentType::H),
            "HTN" => Some(AssignmentType::Htn),
            "Q" => Some(AssignmentType::Q),
            _ => None,
        }
    }
}

/// Parsed, typed representation of a task title.
///
/// Descriptors are transient: they are recomputed from the title string on
/// every parse and never stored. The title is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDescriptor {
    Assignment {
        assignment_type: AssignmentType,
        subject: String,
        description: String,
    },
    Countdown {
        days_left: u32,
        subject: String,
        description: String,
    },
    Priority {
        priority: u32,
        description: String,
    },
    Regular {
        description: String,
    },
}

impl TaskDescriptor {
    /// True only for assignments, which anchor a countdown chain.
    pub fn is_main_task(&self) -> bool {
        matches!(self, TaskDescriptor::Assignment { .. })
    }
}

/// Parse a task title into a descriptor. Total: every input maps to exactly
/// one variant, with `Regular` as the fallback.
///
/// Rules are tried in order; the first match wins:
/// 1. assignment — leading `H`/`HTN`/`Q` token followed by a space
/// 2. countdown — leading non-negative integer, title does not end with `*`
/// 3. priority — text before the first `*` is a non-negative integer
/// 4. regular — everything else
pub fn parse_title(title: &str) -> TaskDescriptor {
    let title = title.trim();

    if let Some(descriptor) = parse_assignment(title) {
        return descriptor;
    }

    let first = title.split_whitespace().next().unwrap_or_default();
    if is_digits(first) && !title.ends_with('*') {
        if let Ok(days_left) = first.parse::<u32>() {
            let mut parts = title.splitn(3, ' ');
            parts.next(); // the number token
            let subject = parts.next().unwrap_or_default().to_string();
            let description = parts.next().unwrap_or_default().to_string();
            return TaskDescriptor::Countdown {
                days_left,
                subject,
                description,
            };
        }
    }

    if let Some((before, after)) = title.split_once('*') {
        let before = before.trim();
        if is_digits(before) {
            if let Ok(priority) = before.parse::<u32>() {
                return TaskDescriptor::Priority {
                    priority,
                    description: after.trim().to_string(),
                };
            }
        }
    }

    TaskDescriptor::Regular {
        description: title.to_string(),
    }
}

/// Assignment descriptor, or `None` when the title does not start with a
/// recognized type token followed by a space.
fn parse_assignment(title: &str) -> Option<TaskDescriptor> {
    let (token, rest) = title.split_once(' ')?;
    let assignment_type = AssignmentType::from_token(token)?;
    let mut parts = rest.splitn(2, ' ');
    let subject = parts.next().unwrap_or_default().to_string();
    let description = parts.next().unwrap_or_default().to_string();
    Some(TaskDescriptor::Assignment {
        assignment_type,
        subject,
        description,
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
