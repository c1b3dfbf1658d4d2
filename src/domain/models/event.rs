use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReservationRecord {
    pub email: String,
}

/// Shape returned by the directory listing. The listing endpoint only
/// carries the fields rendered on the overview, not the full record.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub available_tickets: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub available_tickets: i32,
    pub organizer: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reserved_by: Vec<ReservationRecord>,
}

impl Event {
    pub fn is_sold_out(&self) -> bool {
        self.available_tickets <= 0
    }

    /// Case-sensitive exact match against the reservation records.
    pub fn reserved_for(&self, email: &str) -> bool {
        self.reserved_by.iter().any(|r| r.email == email)
    }

    pub fn ticket_counts_consistent(&self) -> bool {
        self.available_tickets >= 0 && self.available_tickets <= self.capacity
    }
}

/// Validated creation payload, produced by the creation form.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}
