//! Lifecycle rules engine
//!
//! Every command that mutates the store first computes a [`MutationPlan`]: an
//! ordered list of create/update steps plus a summary for the caller. Plans
//! are plain values, so tests can assert their shape before any network call,
//! and [`apply_plan`] executes them against whatever [`TaskStore`] is wired in.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::TaskError;
use crate::notion::TaskStore;
use crate::parser::{parse_title, AssignmentType, TaskDescriptor};
use crate::types::{NewTaskRecord, TaskRecord};

/// How many days before an assignment its countdown chain starts.
pub const COUNTDOWN_LEAD_DAYS: u32 = 5;

/// A single store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    /// Create a record. `link_to_step` points at an earlier `Create` whose
    /// assigned id becomes this record's `related_task_id`; the referenced
    /// step must execute first.
    Create {
        record: NewTaskRecord,
        link_to_step: Option<usize>,
    },
    /// Overwrite a record's status.
    SetStatus { id: String, status: String },
}

/// The ordered set of mutations computed for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationPlan {
    pub steps: Vec<PlanStep>,
    pub summary: String,
}

/// Plan the creation of an assignment and its linked countdown record.
///
/// The anchor gets an uppercased title and status "due"; the countdown record
/// is due [`COUNTDOWN_LEAD_DAYS`] calendar days earlier (a date in the past is
/// valid and simply means the countdown is already overdue) and is linked to
/// the anchor once the anchor's id is known.
pub fn plan_assignment(
    assignment_type: AssignmentType,
    subject: &str,
    description: &str,
    due_date: &str,
    due_time: Option<&str>,
) -> Result<MutationPlan, TaskError> {
    let due = NaiveDate::parse_from_str(due_date, "%Y-%m-%d")
        .map_err(|_| TaskError::Validation(format!("due_date '{due_date}' is not YYYY-MM-DD")))?;
    let time = due_time
        .map(|t| {
            NaiveTime::parse_from_str(t, "%H:%M")
                .map_err(|_| TaskError::Validation(format!("due_time '{t}' is not HH:MM")))
        })
        .transpose()?;

    let anchor_title = format!(
        "{} {} {}",
        assignment_type.as_str(),
        subject.to_uppercase(),
        description.to_uppercase()
    );
    let countdown_title = format!(
        "{} {} {}",
        COUNTDOWN_LEAD_DAYS,
        subject.to_lowercase(),
        description.to_lowercase()
    );

    let steps = vec![
        PlanStep::Create {
            record: NewTaskRecord {
                title: anchor_title.clone(),
                due_date: Some(due),
                due_time: time,
                status: "due".to_string(),
                task_type: "assignment".to_string(),
                priority: None,
                related_task_id: None,
            },
            link_to_step: None,
        },
        PlanStep::Create {
            record: NewTaskRecord {
                title: countdown_title,
                due_date: Some(due - Duration::days(i64::from(COUNTDOWN_LEAD_DAYS))),
                due_time: None,
                status: String::new(),
                task_type: "countdown".to_string(),
                priority: None,
                related_task_id: None,
            },
            link_to_step: Some(0),
        },
    ];

    Ok(MutationPlan {
        steps,
        summary: format!("Created {anchor_title} with {COUNTDOWN_LEAD_DAYS}-day countdown task"),
    })
}

/// Plan a single priority record, titled `"{priority}* {description}"`.
pub fn plan_priority(priority: u32, description: &str) -> Result<MutationPlan, TaskError> {
    if !(1..=5).contains(&priority) {
        return Err(TaskError::Validation(format!(
            "priority must be between 1 and 5, got {priority}"
        )));
    }

    let title = format!("{priority}* {description}");
    Ok(MutationPlan {
        steps: vec![PlanStep::Create {
            record: NewTaskRecord {
                title: title.clone(),
                due_date: None,
                due_time: None,
                status: String::new(),
                task_type: "priority".to_string(),
                priority: Some(priority),
                related_task_id: None,
            },
            link_to_step: None,
        }],
        summary: format!("Added priority task: {title}"),
    })
}

/// Plan the completion of `record` and whatever follow-on work its kind
/// implies.
///
/// The descriptor is re-derived from the record's title rather than its stored
/// fields. Completing a countdown with days left spawns the next link of the
/// chain, due `today + 1`; the successor carries no back-reference (chain
/// linkage is by title convention). Completing an assignment also completes
/// `related`, the countdown records that back-reference it.
pub fn plan_completion(
    record: &TaskRecord,
    related: &[TaskRecord],
    today: NaiveDate,
) -> MutationPlan {
    let mut steps = vec![PlanStep::SetStatus {
        id: record.id.clone(),
        status: "completed".to_string(),
    }];

    let summary = match parse_title(&record.title) {
        TaskDescriptor::Countdown {
            days_left,
            subject,
            description,
        } => {
            let next = i64::from(days_left) - 1;
            if next > 0 {
                let next_title = format!("{next} {subject} {description}");
                steps.push(PlanStep::Create {
                    record: NewTaskRecord {
                        title: next_title.clone(),
                        due_date: Some(today + Duration::days(1)),
                        due_time: None,
                        status: String::new(),
                        task_type: "countdown".to_string(),
                        priority: None,
                        related_task_id: None,
                    },
                    link_to_step: None,
                });
                format!(
                    "Marked '{}' complete and created '{next_title}' for tomorrow",
                    record.title
                )
            } else {
                // days_left of 1 (or 0) ends the chain
                format!("Marked '{}' as completed", record.title)
            }
        }
        TaskDescriptor::Assignment { .. } => {
            let mut cascaded = 0;
            for r in related {
                if r.status != "completed" {
                    steps.push(PlanStep::SetStatus {
                        id: r.id.clone(),
                        status: "completed".to_string(),
                    });
                    cascaded += 1;
                }
            }
            format!(
                "Marked '{}' complete and completed {cascaded} related countdown task(s)",
                record.title
            )
        }
        _ => format!("Marked '{}' as completed", record.title),
    };

    MutationPlan { steps, summary }
}

/// Execute a plan against the store, strictly in step order.
///
/// Linked creates resolve their `related_task_id` from the id the store
/// assigned to the referenced earlier step. There is no rollback: if a step
/// fails, mutations from earlier steps stand and the error is reported as-is.
pub async fn apply_plan(
    store: &dyn TaskStore,
    plan: &MutationPlan,
) -> Result<Vec<TaskRecord>, TaskError> {
    let mut touched: Vec<TaskRecord> = Vec::with_capacity(plan.steps.len());

    for step in &plan.steps {
        let record = match step {
            PlanStep::Create {
                record,
                link_to_step,
            } => {
                let mut record = record.clone();
                if let Some(idx) = link_to_step {
                    let anchor = touched.get(*idx).ok_or_else(|| {
                        TaskError::Store(format!("plan step {idx} produced no record to link to"))
                    })?;
                    record.related_task_id = Some(anchor.id.clone());
                }
                store.create(&record).await?
            }
            PlanStep::SetStatus { id, status } => store.set_status(id, status).await?,
        };
        tracing::debug!(id = %record.id, title = %record.title, "applied plan step");
        touched.push(record);
    }

    Ok(touched)
}
