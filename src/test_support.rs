//! Test doubles and fixtures shared by unit tests.
//!
//! The spies record every call and hold on to the completions they were
//! given, so a test decides when (and whether) each one fires.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use serde_json::{json, Map, Value};
use url::Url;
use uuid::Uuid;

use crate::api::{HttpClient, HttpClientCompletion, HttpResponse};
use crate::cache::{DeletionCompletion, FeedStore, InsertionCompletion, LocalFeedItem};
use crate::error::{StoreError, TransportError};
use crate::feed::FeedItem;

pub(crate) fn any_url() -> Url {
    Url::parse("https://any-url.com").unwrap()
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 3, 12, 0, 0).unwrap()
}

/// A feed item together with its JSON wire form.  Absent optionals are left
/// out of the JSON entirely.
pub(crate) fn make_item(description: Option<&str>, location: Option<&str>) -> (FeedItem, Value) {
    let id = Uuid::new_v4();
    let image = Url::parse(&format!("https://a-url.com/{id}.png")).unwrap();
    let item = FeedItem::new(
        id,
        description.map(String::from),
        location.map(String::from),
        image.clone(),
    );

    let mut wire = Map::new();
    wire.insert("id".into(), json!(id.to_string()));
    if let Some(description) = description {
        wire.insert("description".into(), json!(description));
    }
    if let Some(location) = location {
        wire.insert("location".into(), json!(location));
    }
    wire.insert("image".into(), json!(image.as_str()));

    (item, Value::Object(wire))
}

pub(crate) fn items_json(items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).unwrap()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap()
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

pub(crate) struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub(crate) fn advance(&self, delta: TimeDelta) {
        *lock(&self.0) += delta;
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *lock(&self.0)
    }
}

// ---------------------------------------------------------------------------
// HTTP client spy
// ---------------------------------------------------------------------------

#[derive(Default)]
pub(crate) struct HttpClientSpy {
    requests: Mutex<Vec<(Url, Option<HttpClientCompletion>)>>,
}

impl HttpClientSpy {
    pub(crate) fn requested_urls(&self) -> Vec<Url> {
        lock(&self.requests).iter().map(|(url, _)| url.clone()).collect()
    }

    pub(crate) fn complete_with_error(&self, error: TransportError, index: usize) {
        let completion = self.take_completion(index);
        completion(Err(error));
    }

    pub(crate) fn complete_with_status(&self, status_code: u16, data: &[u8], index: usize) {
        let (url, completion) = {
            let mut requests = lock(&self.requests);
            let (url, completion) = &mut requests[index];
            (url.clone(), completion.take().expect("request already completed"))
        };
        completion(Ok((data.to_vec(), HttpResponse::new(url, status_code))));
    }

    fn take_completion(&self, index: usize) -> HttpClientCompletion {
        lock(&self.requests)[index]
            .1
            .take()
            .expect("request already completed")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        lock(&self.requests).push((url.clone(), Some(completion)));
    }
}

// ---------------------------------------------------------------------------
// Feed store spy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreMessage {
    DeleteCachedFeed,
    Insert(Vec<LocalFeedItem>, DateTime<Utc>),
}

#[derive(Default)]
pub(crate) struct FeedStoreSpy {
    messages: Mutex<Vec<StoreMessage>>,
    deletions: Mutex<Vec<Option<DeletionCompletion>>>,
    insertions: Mutex<Vec<Option<InsertionCompletion>>>,
}

impl FeedStoreSpy {
    pub(crate) fn messages(&self) -> Vec<StoreMessage> {
        lock(&self.messages).clone()
    }

    pub(crate) fn complete_deletion(&self, result: Result<(), StoreError>, index: usize) {
        let completion = lock(&self.deletions)[index]
            .take()
            .expect("deletion already completed");
        completion(result);
    }

    pub(crate) fn complete_insertion(&self, result: Result<(), StoreError>, index: usize) {
        let completion = lock(&self.insertions)[index]
            .take()
            .expect("insertion already completed");
        completion(result);
    }
}

impl FeedStore for FeedStoreSpy {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        lock(&self.messages).push(StoreMessage::DeleteCachedFeed);
        lock(&self.deletions).push(Some(completion));
    }

    fn insert(
        &self,
        items: Vec<LocalFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        lock(&self.messages).push(StoreMessage::Insert(items, timestamp));
        lock(&self.insertions).push(Some(completion));
    }
}
