use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, error, info, instrument, warn};

use super::entity::Entity;
use super::error::PanelError;
use super::filter::SearchFilter;
use super::form::{FormMode, FormState};
use crate::api::{ApiClient, ApiResponse};
use crate::model::error_info::ErrorInfo;
use crate::model::record_id::RecordId;
use crate::models::Page;
use crate::notify::{Confirmation, Notice, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// List, search, create/edit and delete for one entity type.
///
/// Every failure goes through one reporting path: each API `userMessage` (or
/// the error text for other failures) becomes an error notice, and the error
/// is returned to the caller as well. The list is always re-fetched after a
/// successful mutation.
pub struct CrudPanel<E: Entity> {
    api: Arc<dyn ApiClient>,
    notifier: Arc<dyn Notifier>,
    records: Vec<E>,
    form: FormState<E>,
    filter: SearchFilter<E::Filter>,
    errors: Vec<ErrorInfo>,
}

impl<E: Entity> CrudPanel<E> {
    pub fn new(api: Arc<dyn ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            records: Vec::new(),
            form: FormState::default(),
            filter: SearchFilter::default(),
            errors: Vec::new(),
        }
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&E> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn form(&self) -> &FormState<E> {
        &self.form
    }

    pub fn filter(&self) -> &SearchFilter<E::Filter> {
        &self.filter
    }

    /// Errors from the last failed request when the API rejected it; empty
    /// after any other outcome.
    pub fn errors(&self) -> &[ErrorInfo] {
        &self.errors
    }

    /// Initial load.
    pub async fn mount(&mut self) -> Result<(), PanelError> {
        info!(resource = E::RESOURCE, "mounting panel");
        self.load().await
    }

    /// Fetch the list, filtered when a search is active.
    #[instrument(name = "panel_load", skip(self), fields(resource = E::RESOURCE))]
    pub async fn load(&mut self) -> Result<(), PanelError> {
        match self.fetch().await {
            Ok(records) => {
                debug!(count = records.len(), "list loaded");
                self.records = records;
                Ok(())
            }
            Err(e) => Err(self.report(e).await),
        }
    }

    async fn fetch(&self) -> Result<Vec<E>, PanelError> {
        let response = self
            .api
            .get(E::RESOURCE, self.filter.query_pairs())
            .await?;
        let response = expect_status(response, StatusCode::OK)?;
        let page: Page<E> = response.json()?;
        Ok(page.content)
    }

    /// Choose the search key. Does not fetch until the query changes.
    pub fn select_filter(&mut self, field: Option<E::Filter>) {
        self.filter.select(field);
    }

    pub async fn search(&mut self, query: impl Into<String>) -> Result<(), PanelError> {
        self.filter.set_query(query);
        self.load().await
    }

    pub async fn clear_filters(&mut self) -> Result<(), PanelError> {
        self.filter.clear();
        self.load().await
    }

    pub fn open_new(&mut self) {
        self.errors.clear();
        self.form.open_blank();
    }

    pub fn open_edit(&mut self, record: E) {
        debug!(id = %record.id(), "editing record");
        self.errors.clear();
        self.form.open_with(record);
    }

    /// Cancel: close the modal and discard the draft.
    pub fn close_modal(&mut self) {
        self.errors.clear();
        self.form.close();
    }

    /// Look up a listed record by code, reporting unknown codes.
    pub async fn select(&mut self, id: RecordId) -> Result<E, PanelError> {
        match self.record(id) {
            Some(record) => Ok(record.clone()),
            None => Err(self.report(PanelError::UnknownRecord(id)).await),
        }
    }

    pub async fn set_field(&mut self, field: E::Field, value: String) -> Result<(), PanelError> {
        if !self.form.is_open() {
            return Err(self.report(PanelError::NoOpenForm).await);
        }
        self.form.set(field, value);
        Ok(())
    }

    /// Create (`POST`, expects 201) or update (`PUT`, expects 200) the draft.
    ///
    /// On failure the modal stays open with the draft untouched.
    #[instrument(name = "panel_submit", skip(self), fields(resource = E::RESOURCE))]
    pub async fn submit(&mut self) -> Result<(), PanelError> {
        if !self.form.is_open() {
            return Err(self.report(PanelError::NoOpenForm).await);
        }
        let mode = self.form.mode();
        match self.send_draft(mode).await {
            Ok(()) => {
                info!(?mode, "record saved");
                self.errors.clear();
                self.form.close();
                self.reload_after_mutation().await;
                let text = match mode {
                    FormMode::Create => "Record saved successfully!",
                    FormMode::Edit(_) => "Record updated successfully!",
                };
                self.notifier.notify(Notice::success(text, "")).await;
                Ok(())
            }
            Err(e) => Err(self.report(e).await),
        }
    }

    async fn send_draft(&self, mode: FormMode) -> Result<(), PanelError> {
        let body = serde_json::to_value(self.form.draft())?;
        match mode {
            FormMode::Create => {
                let response = self.api.post(E::RESOURCE, body).await?;
                expect_status(response, StatusCode::CREATED)?;
            }
            FormMode::Edit(id) => {
                let response = self.api.put(&E::item_path(id), body).await?;
                expect_status(response, StatusCode::OK)?;
            }
        }
        Ok(())
    }

    /// Ask for confirmation, then `DELETE` and wait for the 204.
    ///
    /// The success notice is only shown once the 204 has arrived.
    #[instrument(name = "panel_delete", skip(self, record), fields(resource = E::RESOURCE, id = %record.id()))]
    pub async fn delete(&mut self, record: &E) -> Result<DeleteOutcome, PanelError> {
        let id = record.id();
        if id.is_new() {
            return Err(self.report(PanelError::UnknownRecord(id)).await);
        }
        if !self
            .notifier
            .confirm(&Confirmation::delete_record())
            .await
        {
            debug!("delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let outcome = match self.api.delete(&E::item_path(id)).await {
            Ok(response) => expect_status(response, StatusCode::NO_CONTENT).map(|_| ()),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = outcome {
            return Err(self.report(e).await);
        }

        info!("record deleted");
        self.errors.clear();
        self.form.close();
        self.reload_after_mutation().await;
        self.notifier
            .notify(Notice::success("Success!", "Record deleted successfully!"))
            .await;
        Ok(DeleteOutcome::Deleted)
    }

    async fn reload_after_mutation(&mut self) {
        // Already reported by `load`; the mutation itself went through.
        if let Err(e) = self.load().await {
            debug!(error = %e, "list refresh after mutation failed");
        }
    }

    /// Surface `error` to the user and hand it back.
    async fn report(&mut self, error: PanelError) -> PanelError {
        match &error {
            PanelError::Rejected { status, errors } => {
                for info in errors {
                    warn!(
                        status = %status,
                        developer_message = %info.developer_message,
                        "request rejected: {}",
                        info.user_message
                    );
                }
                self.errors = errors.clone();
                for info in errors {
                    self.notifier
                        .notify(Notice::error(info.user_message.clone()))
                        .await;
                }
            }
            other => {
                error!(error = %other, "panel operation failed");
                self.errors.clear();
                self.notifier.notify(Notice::error(other.to_string())).await;
            }
        }
        error
    }
}

/// Accept only `expected`; turn error bodies into [`PanelError::Rejected`].
fn expect_status(response: ApiResponse, expected: StatusCode) -> Result<ApiResponse, PanelError> {
    let status = response.status;
    if status == expected {
        return Ok(response);
    }
    if status.is_success() {
        return Err(PanelError::UnexpectedStatus { status });
    }
    match response.json::<Vec<ErrorInfo>>() {
        Ok(errors) if !errors.is_empty() => Err(PanelError::Rejected { status, errors }),
        _ => Err(PanelError::UnexpectedStatus { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::model::employee::{EmployeeField, EmployeeFilter, EmployeeRecord};
    use crate::notify::NoticeLevel;
    use crate::panel::EmployeePanel;
    use crate::test_support::{FakeApi, RecordingNotifier, page_of};
    use reqwest::Method;
    use rstest::rstest;
    use serde_json::json;

    fn ana() -> EmployeeRecord {
        EmployeeRecord::new(7, "Ana", "Silva", "ana@x.com", "123")
    }

    fn bruno() -> EmployeeRecord {
        EmployeeRecord::new(8, "Bruno", "Costa", "bruno@x.com", "456")
    }

    fn panel(api: &Arc<FakeApi>, notifier: &Arc<RecordingNotifier>) -> EmployeePanel {
        CrudPanel::new(api.clone(), notifier.clone())
    }

    fn fill(panel: &mut EmployeePanel, record: &EmployeeRecord) {
        panel.open_new();
        for field in [
            EmployeeField::FirstName,
            EmployeeField::LastName,
            EmployeeField::Email,
            EmployeeField::NationalIdNumber,
        ] {
            panel.form.set(field, record.get(field).to_owned());
        }
    }

    #[actix_web::test]
    async fn mount_fetches_unfiltered_list() {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, page_of(&[ana(), bruno()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.mount().await.unwrap();

        assert_eq!(api.targets(), vec!["/employees"]);
        assert_eq!(panel.records(), &[ana(), bruno()]);
        assert!(notifier.notices().is_empty());
    }

    #[rstest]
    #[case(EmployeeFilter::Name, "Ana", "/employees?name=Ana")]
    #[case(EmployeeFilter::Surname, "Silva", "/employees?surname=Silva")]
    #[case(EmployeeFilter::Email, "a@example.com", "/employees?email=a@example.com")]
    #[case(EmployeeFilter::NationalIdNumber, "123", "/employees?nationalIdNumber=123")]
    #[actix_web::test]
    async fn search_sends_one_filter_pair(
        #[case] field: EmployeeFilter,
        #[case] query: &str,
        #[case] expected: &str,
    ) {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, page_of(&[ana()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.select_filter(Some(field));
        panel.search(query).await.unwrap();

        assert_eq!(api.targets(), vec![expected]);
    }

    #[actix_web::test]
    async fn search_without_field_is_unfiltered() {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, page_of(&[ana()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.search("a@example.com").await.unwrap();

        assert_eq!(api.targets(), vec!["/employees"]);
    }

    #[actix_web::test]
    async fn selecting_a_field_alone_does_not_fetch() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.select_filter(Some(EmployeeFilter::Email));

        assert!(api.requests().is_empty());
    }

    #[actix_web::test]
    async fn clearing_filters_returns_to_initial_list() {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, page_of(&[ana(), bruno()]));
        api.respond(StatusCode::OK, page_of(&[bruno()]));
        api.respond(StatusCode::OK, page_of(&[ana(), bruno()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.mount().await.unwrap();
        let initial = panel.records().to_vec();
        panel.select_filter(Some(EmployeeFilter::Surname));
        panel.search("Costa").await.unwrap();
        assert_eq!(panel.records(), &[bruno()]);
        panel.clear_filters().await.unwrap();

        assert_eq!(panel.records(), initial.as_slice());
        assert_eq!(
            api.targets(),
            vec!["/employees", "/employees?surname=Costa", "/employees"]
        );
        assert_eq!(panel.filter().field(), None);
        assert_eq!(panel.filter().query(), "");
    }

    #[actix_web::test]
    async fn list_failure_is_reported() {
        let api = FakeApi::new();
        api.fail(TransportError::Timeout);
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        let error = panel.mount().await.unwrap_err();

        assert!(matches!(error, PanelError::Transport(TransportError::Timeout)));
        assert_eq!(notifier.errors(), vec!["the request timed out"]);
    }

    #[actix_web::test]
    async fn malformed_list_body_is_reported() {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, json!({"items": []}));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        let error = panel.load().await.unwrap_err();

        assert!(matches!(error, PanelError::Decode(_)));
        assert_eq!(notifier.errors().len(), 1);
    }

    #[actix_web::test]
    async fn open_new_resets_form() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.open_edit(ana());
        panel.close_modal();
        panel.open_new();

        assert!(panel.form().is_open());
        assert_eq!(panel.form().mode(), FormMode::Create);
        assert_eq!(panel.form().draft(), &EmployeeRecord::default());
    }

    #[actix_web::test]
    async fn edit_populates_form_with_selected_record() {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, page_of(&[ana(), bruno()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);
        panel.mount().await.unwrap();

        let selected = panel.select(RecordId(7)).await.unwrap();
        panel.open_edit(selected);

        assert!(panel.form().is_open());
        let draft = panel.form().draft();
        assert_eq!(draft.id, RecordId(7));
        assert_eq!(draft.first_name, "Ana");
        assert_eq!(draft.last_name, "Silva");
        assert_eq!(draft.email, "ana@x.com");
        assert_eq!(draft.national_id_number, "123");
    }

    #[actix_web::test]
    async fn create_success_closes_clears_refetches_and_notifies_once() {
        let api = FakeApi::new();
        let created = EmployeeRecord::new(9, "Caio", "Reis", "caio@x.com", "789");
        api.respond(StatusCode::CREATED, serde_json::to_value(&created).unwrap());
        api.respond(StatusCode::OK, page_of(&[created.clone()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        fill(&mut panel, &EmployeeRecord::new(0, "Caio", "Reis", "caio@x.com", "789"));
        panel.submit().await.unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].target(), "/employees");
        assert_eq!(requests[0].body.as_ref().unwrap()["id"], json!(0));
        assert_eq!(requests[1].method, Method::GET);
        assert!(!panel.form().is_open());
        assert_eq!(panel.form().draft(), &EmployeeRecord::default());
        assert_eq!(panel.records(), &[created]);
        assert_eq!(notifier.successes(), vec!["Record saved successfully!"]);
        assert!(notifier.errors().is_empty());
    }

    #[actix_web::test]
    async fn edit_success_puts_to_item_path() {
        let api = FakeApi::new();
        let mut changed = ana();
        changed.email = "ana.silva@x.com".to_owned();
        api.respond(StatusCode::OK, serde_json::to_value(&changed).unwrap());
        api.respond(StatusCode::OK, page_of(&[changed.clone()]));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.open_edit(ana());
        panel
            .set_field(EmployeeField::Email, "ana.silva@x.com".to_owned())
            .await
            .unwrap();
        panel.submit().await.unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].target(), "/employees/7");
        assert_eq!(
            requests[0].body.as_ref().unwrap()["email"],
            json!("ana.silva@x.com")
        );
        assert_eq!(requests[1].target(), "/employees");
        assert!(!panel.form().is_open());
        assert_eq!(panel.form().draft(), &EmployeeRecord::default());
        assert_eq!(notifier.successes(), vec!["Record updated successfully!"]);
    }

    #[actix_web::test]
    async fn rejected_create_keeps_modal_and_shows_user_message_only() {
        let api = FakeApi::new();
        api.respond(
            StatusCode::BAD_REQUEST,
            json!([{
                "userMessage": "Email already in use",
                "developerMessage": "unique constraint employees_email_key"
            }]),
        );
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);
        let draft = EmployeeRecord::new(0, "Ana", "Silva", "ana@x.com", "123");

        fill(&mut panel, &draft);
        let error = panel.submit().await.unwrap_err();

        assert!(matches!(error, PanelError::Rejected { status, .. } if status == StatusCode::BAD_REQUEST));
        assert_eq!(notifier.errors(), vec!["Email already in use"]);
        assert!(notifier.successes().is_empty());
        assert!(panel.form().is_open());
        assert_eq!(panel.form().draft(), &draft);
        assert_eq!(panel.errors().len(), 1);
        assert_eq!(api.requests().len(), 1);
    }

    #[actix_web::test]
    async fn every_user_message_is_shown() {
        let api = FakeApi::new();
        api.respond(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!([
                {"userMessage": "First name is required", "developerMessage": "firstName blank"},
                {"userMessage": "Email is required", "developerMessage": "email blank"}
            ]),
        );
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        panel.open_edit(ana());
        panel.submit().await.unwrap_err();

        assert_eq!(
            notifier.errors(),
            vec!["First name is required", "Email is required"]
        );
    }

    #[actix_web::test]
    async fn unexpected_success_status_is_a_failure() {
        let api = FakeApi::new();
        api.respond(StatusCode::OK, json!({}));
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        fill(&mut panel, &ana());
        let error = panel.submit().await.unwrap_err();

        assert!(matches!(error, PanelError::UnexpectedStatus { .. }));
        assert!(panel.form().is_open());
        assert!(notifier.successes().is_empty());
    }

    #[actix_web::test]
    async fn submit_without_open_form_is_rejected_locally() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        let error = panel.submit().await.unwrap_err();

        assert!(matches!(error, PanelError::NoOpenForm));
        assert!(api.requests().is_empty());
    }

    #[actix_web::test]
    async fn confirmed_delete_notifies_after_204() {
        let api = FakeApi::new();
        api.respond_empty(StatusCode::NO_CONTENT);
        api.respond(StatusCode::OK, page_of(&[bruno()]));
        let notifier = RecordingNotifier::new();
        notifier.answer(true);
        let mut panel = panel(&api, &notifier);
        panel.open_edit(ana());

        let outcome = panel.delete(&ana()).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(api.requests()[0].method, Method::DELETE);
        assert_eq!(api.targets(), vec!["/employees/7", "/employees"]);
        assert!(!panel.form().is_open());
        assert_eq!(panel.form().draft(), &EmployeeRecord::default());
        assert_eq!(panel.records(), &[bruno()]);
        assert_eq!(notifier.confirmations(), 1);
        assert_eq!(notifier.successes(), vec!["Success!"]);
    }

    #[rstest]
    #[case(StatusCode::OK)]
    #[case(StatusCode::NOT_FOUND)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn delete_without_204_never_notifies_success(#[case] status: StatusCode) {
        let api = FakeApi::new();
        api.respond(
            status,
            json!([{"userMessage": "Record not found", "developerMessage": "no row 7"}]),
        );
        let notifier = RecordingNotifier::new();
        notifier.answer(true);
        let mut panel = panel(&api, &notifier);

        panel.delete(&ana()).await.unwrap_err();

        assert!(notifier.successes().is_empty());
        assert_eq!(notifier.errors().len(), 1);
        assert_eq!(api.requests().len(), 1);
    }

    #[actix_web::test]
    async fn delete_transport_failure_never_notifies_success() {
        let api = FakeApi::new();
        api.fail(TransportError::Connect("connection refused".to_owned()));
        let notifier = RecordingNotifier::new();
        notifier.answer(true);
        let mut panel = panel(&api, &notifier);

        panel.delete(&ana()).await.unwrap_err();

        assert!(notifier.successes().is_empty());
        assert_eq!(notifier.notices()[0].level, NoticeLevel::Error);
    }

    #[actix_web::test]
    async fn cancelled_delete_sends_nothing() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();
        notifier.answer(false);
        let mut panel = panel(&api, &notifier);

        let outcome = panel.delete(&ana()).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(api.requests().is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[actix_web::test]
    async fn selecting_unlisted_code_is_reported() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        let error = panel.select(RecordId(99)).await.unwrap_err();

        assert!(matches!(error, PanelError::UnknownRecord(RecordId(99))));
        assert_eq!(notifier.errors(), vec!["no record with code 99 is listed"]);
    }

    #[actix_web::test]
    async fn failed_refresh_after_create_still_confirms_the_save() {
        let api = FakeApi::new();
        let created = EmployeeRecord::new(9, "Caio", "Reis", "caio@x.com", "789");
        api.respond(StatusCode::CREATED, serde_json::to_value(&created).unwrap());
        api.fail(TransportError::Timeout);
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        fill(&mut panel, &EmployeeRecord::new(0, "Caio", "Reis", "caio@x.com", "789"));
        panel.submit().await.unwrap();

        let levels: Vec<_> = notifier.notices().iter().map(|notice| notice.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Error, NoticeLevel::Success]);
        assert_eq!(notifier.errors(), vec!["the request timed out"]);
        assert_eq!(notifier.successes(), vec!["Record saved successfully!"]);
        assert!(!panel.form().is_open());
        assert_eq!(api.targets(), vec!["/employees", "/employees"]);
    }

    #[actix_web::test]
    async fn failed_refresh_after_delete_still_confirms_the_delete() {
        let api = FakeApi::new();
        api.respond_empty(StatusCode::NO_CONTENT);
        api.fail(TransportError::Connect("connection reset".to_owned()));
        let notifier = RecordingNotifier::new();
        notifier.answer(true);
        let mut panel = panel(&api, &notifier);
        panel.open_edit(ana());

        let outcome = panel.delete(&ana()).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        let levels: Vec<_> = notifier.notices().iter().map(|notice| notice.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Error, NoticeLevel::Success]);
        assert_eq!(notifier.successes(), vec!["Success!"]);
        assert!(!panel.form().is_open());
    }

    #[actix_web::test]
    async fn non_rejection_failure_drops_previous_api_errors() {
        let api = FakeApi::new();
        api.respond(
            StatusCode::BAD_REQUEST,
            json!([{"userMessage": "Email already in use", "developerMessage": "dup"}]),
        );
        api.fail(TransportError::Timeout);
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        fill(&mut panel, &ana());
        panel.submit().await.unwrap_err();
        assert_eq!(panel.errors().len(), 1);
        panel.submit().await.unwrap_err();

        assert!(panel.errors().is_empty());
        assert!(panel.form().is_open());
    }

    #[actix_web::test]
    async fn reopening_the_form_drops_previous_api_errors() {
        let api = FakeApi::new();
        api.respond(
            StatusCode::BAD_REQUEST,
            json!([{"userMessage": "Email already in use", "developerMessage": "dup"}]),
        );
        let notifier = RecordingNotifier::new();
        let mut panel = panel(&api, &notifier);

        fill(&mut panel, &ana());
        panel.submit().await.unwrap_err();
        panel.close_modal();
        panel.open_new();

        assert!(panel.errors().is_empty());
    }
}
