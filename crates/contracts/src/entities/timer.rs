use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{CompanyId, TimerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimerDTO {
    #[schema(value_type = String)]
    pub id: TimerId,
    pub start: DateTime<Utc>,
    /// `null` while the timer is running
    pub end: Option<DateTime<Utc>>,
}

/// Timers recorded against one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTimerDTO {
    #[schema(value_type = String)]
    pub id: CompanyId,
    pub name: String,
    pub timers: Vec<TimerDTO>,
}

impl TimerDTO {
    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed time of a stopped timer
    pub fn duration(&self) -> Option<Duration> {
        self.end.map(|end| end - self.start)
    }
}

impl CompanyTimerDTO {
    pub fn running(&self) -> impl Iterator<Item = &TimerDTO> {
        self.timers.iter().filter(|timer| timer.is_running())
    }

    /// Sum of all stopped timers, `None` if the total overflows
    pub fn total_recorded(&self) -> Option<Duration> {
        self.timers
            .iter()
            .filter_map(TimerDTO::duration)
            .try_fold(Duration::zero(), |acc, d| acc.checked_add(&d))
    }
}
