#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use eventdesk::domain::models::event::{Event, EventSummary, NewEvent, ReservationRecord};
use eventdesk::domain::ports::{AuthApi, EventsApi, ReservationsApi, SessionStore};
use eventdesk::error::AppError;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub fn sample_event(id: &str, available: i32, capacity: i32, reserved: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        title: "Concert".to_string(),
        description: "An evening of music".to_string(),
        date: Utc.with_ymd_and_hms(2026, 9, 1, 20, 0, 0).unwrap(),
        location: "Main hall".to_string(),
        capacity,
        available_tickets: available,
        organizer: "user-1".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        reserved_by: reserved
            .iter()
            .map(|e| ReservationRecord {
                email: e.to_string(),
            })
            .collect(),
    }
}

/// Token with the given claims, signed with a throwaway secret. The client
/// never checks the signature, only the payload.
pub fn make_token(sub: &str, email: &str) -> String {
    encode(
        &Header::default(),
        &serde_json::json!({ "sub": sub, "email": email }),
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

pub struct MockEventsApi {
    events: Mutex<Vec<Event>>,
    fail_loads: bool,
    pub create_calls: AtomicUsize,
}

impl MockEventsApi {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            fail_loads: false,
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_loads: true,
            create_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EventsApi for MockEventsApi {
    async fn list(&self) -> Result<Vec<EventSummary>, AppError> {
        if self.fail_loads {
            return Err(AppError::Api {
                status: 500,
                message: String::new(),
            });
        }
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .map(|e| EventSummary {
                id: e.id.clone(),
                title: e.title.clone(),
                date: e.date,
                location: e.location.clone(),
                available_tickets: e.available_tickets,
            })
            .collect())
    }

    async fn get(&self, event_id: &str) -> Result<Event, AppError> {
        if self.fail_loads {
            return Err(AppError::Api {
                status: 500,
                message: String::new(),
            });
        }
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("event {event_id}")))
    }

    async fn create(&self, _token: &str, event: &NewEvent) -> Result<Event, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut created = sample_event("created-1", event.capacity, event.capacity, &[]);
        created.title = event.title.clone();
        created.description = event.description.clone();
        created.date = event.date;
        created.location = event.location.clone();
        Ok(created)
    }
}

pub struct MockReservationsApi {
    fail: AtomicBool,
    pub reserve_calls: AtomicUsize,
    pub cancel_calls: AtomicUsize,
}

impl MockReservationsApi {
    pub fn new() -> Self {
        Self {
            fail: AtomicBool::new(false),
            reserve_calls: AtomicUsize::new(0),
            cancel_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let api = Self::new();
        api.fail.store(true, Ordering::SeqCst);
        api
    }
}

#[async_trait]
impl ReservationsApi for MockReservationsApi {
    async fn reserve(&self, _token: &str, _event_id: &str) -> Result<(), AppError> {
        self.reserve_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Api {
                status: 500,
                message: String::new(),
            });
        }
        Ok(())
    }

    async fn cancel(&self, _token: &str, _event_id: &str) -> Result<(), AppError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Api {
                status: 500,
                message: String::new(),
            });
        }
        Ok(())
    }
}

pub struct MockAuthApi {
    pub issued_token: String,
    pub register_calls: AtomicUsize,
}

impl MockAuthApi {
    pub fn issuing(token: &str) -> Self {
        Self {
            issued_token: token.to_string(),
            register_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn register(&self, _email: &str, _password: &str) -> Result<(), AppError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<String, AppError> {
        Ok(self.issued_token.clone())
    }
}

pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
    email: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn anonymous() -> Self {
        Self {
            token: Mutex::new(None),
            email: Mutex::new(None),
        }
    }

    pub fn logged_in(token: &str, email: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            email: Mutex::new(Some(email.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn email(&self) -> Result<Option<String>, AppError> {
        Ok(self.email.lock().unwrap().clone())
    }

    fn store_login(&self, token: &str, email: &str) -> Result<(), AppError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        *self.email.lock().unwrap() = Some(email.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
