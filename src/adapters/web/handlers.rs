use super::render;
use super::AppState;
use crate::core::{ContactId, ContactStatus, NewContact, SearchOutcome};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct AddContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: Option<String>,
}

impl AddContactForm {
    fn into_new_contact(self) -> NewContact {
        // unknown status strings fall back to the default
        let status = self
            .status
            .as_deref()
            .and_then(|s| s.parse::<ContactStatus>().ok());
        NewContact {
            name: self.name,
            email: self.email,
            phone: self.phone,
            status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email: String,
    pub id: Option<String>,
}

/// Collects every `ids` value from a urlencoded body. Malformed ids are dropped.
pub fn parse_ids(body: &[u8]) -> HashSet<ContactId> {
    url::form_urlencoded::parse(body)
        .filter(|(key, _)| key == "ids")
        .filter_map(|(_, value)| match value.parse::<ContactId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!("Ignoring id: {}", e);
                None
            }
        })
        .collect()
}

pub async fn index() -> Html<&'static str> {
    Html(render::index_page())
}

pub async fn list_contacts(State(state): State<AppState>) -> Html<String> {
    let contacts = state.directory.all().await;
    Html(render::contacts_table(&contacts))
}

pub async fn activate(State(state): State<AppState>, body: Bytes) -> Html<String> {
    let ids = parse_ids(&body);
    let changed = state.directory.activate(&ids).await;
    tracing::info!("Activated {} of {} selected contacts", changed.len(), ids.len());
    let contacts = state.directory.all().await;
    Html(render::contact_rows(&contacts, &changed, "activate"))
}

pub async fn deactivate(State(state): State<AppState>, body: Bytes) -> Html<String> {
    let ids = parse_ids(&body);
    let changed = state.directory.deactivate(&ids).await;
    tracing::info!("Deactivated {} of {} selected contacts", changed.len(), ids.len());
    let contacts = state.directory.all().await;
    Html(render::contact_rows(&contacts, &changed, "deactivate"))
}

pub async fn search_contact(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    match state.directory.search(&params.q).await {
        SearchOutcome::EmptyQuery => Html(String::new()),
        SearchOutcome::Matches(matches) => Html(render::search_results(&matches)),
    }
}

pub async fn add_contact(
    State(state): State<AppState>,
    Form(form): Form<AddContactForm>,
) -> Html<String> {
    let contact = state.directory.insert(form.into_new_contact()).await;
    tracing::info!("Added contact {}", contact.id);
    let contacts = state.directory.all().await;
    Html(render::contacts_table(&contacts))
}

/// Empty 200 so htmx swaps the row out. Unknown or malformed ids are a no-op.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Html<String> {
    match contact_id.parse::<ContactId>() {
        Ok(id) => {
            if state.directory.delete(&id).await {
                tracing::info!("Deleted contact {}", id);
            }
        }
        Err(e) => tracing::debug!("Delete ignored: {}", e),
    }
    Html(String::new())
}

pub async fn count_contacts(State(state): State<AppState>) -> Html<String> {
    Html(render::count(state.directory.count_total().await, "total"))
}

pub async fn count_active_contacts(State(state): State<AppState>) -> Html<String> {
    let n = state.directory.count_by_status(ContactStatus::Active).await;
    Html(render::count(n, "active"))
}

pub async fn count_inactive_contacts(State(state): State<AppState>) -> Html<String> {
    let n = state.directory.count_by_status(ContactStatus::Inactive).await;
    Html(render::count(n, "inactive"))
}

pub async fn validate_email(
    State(state): State<AppState>,
    Form(form): Form<EmailForm>,
) -> Html<String> {
    let exclude = form
        .id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| s.parse::<ContactId>().ok());
    let check = state.directory.validate_email(&form.email, exclude.as_ref()).await;
    tracing::debug!("Email candidate checked: {:?}", check);
    Html(render::email_feedback(check))
}

pub async fn modal() -> Html<&'static str> {
    Html(render::modal())
}

pub async fn health() -> &'static str {
    "ok"
}
