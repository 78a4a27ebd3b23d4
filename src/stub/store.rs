use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::employee::{EmployeeFilter, EmployeeRecord};
use crate::model::error_info::ErrorInfo;
use crate::model::record_id::RecordId;

#[derive(Debug)]
pub enum StoreError {
    Invalid(Vec<ErrorInfo>),
    NotFound(RecordId),
}

#[derive(Default)]
struct State {
    last_id: i64,
    records: BTreeMap<RecordId, EmployeeRecord>,
}

/// In-memory employees table behind the stub API.
#[derive(Default)]
pub struct EmployeeStore {
    state: Mutex<State>,
}

impl EmployeeStore {
    /// Seed records keep their ids when set; new ids continue after the highest.
    pub fn with_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        let store = Self::default();
        {
            let mut state = store.lock();
            for mut record in records {
                if record.id.is_new() {
                    record.id = RecordId(state.last_id + 1);
                }
                state.last_id = state.last_id.max(record.id.0);
                state.records.insert(record.id, record);
            }
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Case-insensitive substring match on one key.
    pub fn list(&self, filter: Option<(EmployeeFilter, &str)>) -> Vec<EmployeeRecord> {
        let state = self.lock();
        state
            .records
            .values()
            .filter(|record| match filter {
                Some((key, needle)) => matches_filter(record, key, needle),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn create(&self, mut record: EmployeeRecord) -> Result<EmployeeRecord, StoreError> {
        let mut state = self.lock();
        validate(&state, &record, None)?;
        state.last_id += 1;
        record.id = RecordId(state.last_id);
        state.records.insert(record.id, record.clone());
        Ok(record)
    }

    pub fn update(&self, id: RecordId, mut record: EmployeeRecord) -> Result<EmployeeRecord, StoreError> {
        let mut state = self.lock();
        if !state.records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        validate(&state, &record, Some(id))?;
        record.id = id;
        state.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn delete(&self, id: RecordId) -> Result<(), StoreError> {
        self.lock()
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

fn matches_filter(record: &EmployeeRecord, key: EmployeeFilter, needle: &str) -> bool {
    let haystack = match key {
        EmployeeFilter::Name => &record.first_name,
        EmployeeFilter::Surname => &record.last_name,
        EmployeeFilter::Email => &record.email,
        EmployeeFilter::NationalIdNumber => &record.national_id_number,
    };
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn validate(state: &State, record: &EmployeeRecord, own_id: Option<RecordId>) -> Result<(), StoreError> {
    let mut errors = Vec::new();
    if record.first_name.trim().is_empty() {
        errors.push(ErrorInfo::new("First name is required", "firstName must not be blank"));
    }
    if record.email.trim().is_empty() {
        errors.push(ErrorInfo::new("Email is required", "email must not be blank"));
    } else if !record.email.contains('@') {
        errors.push(ErrorInfo::new(
            "Email is invalid",
            format!("email `{}` has no domain part", record.email),
        ));
    }
    let email = record.email.trim().to_lowercase();
    let duplicate = state
        .records
        .values()
        .any(|other| Some(other.id) != own_id && other.email.trim().to_lowercase() == email);
    if !email.is_empty() && duplicate {
        errors.push(ErrorInfo::new(
            "Email already in use",
            format!("unique constraint violated on email `{email}`"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Invalid(errors))
    }
}
