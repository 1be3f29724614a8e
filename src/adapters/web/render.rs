//! HTML fragments swapped into the page by htmx.

use crate::core::{Contact, ContactId, EmailCheck};
use std::collections::HashSet;

const INDEX_PAGE: &str = include_str!("../../../assets/index.html");

const DELETE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-trash"><path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/></svg>"#;

const MODAL: &str = r#"<div id="modal" _="on closeModal add .closing then wait for animationend then remove me">
    <div class="modal-underlay" _="on click trigger closeModal"></div>
    <div class="modal-content">
        <h1>Modal Dialog</h1>
        This is the modal content.
        You can put anything here, like text, or a form, or an image.
        <br>
        <br>
        <button _="on click trigger closeModal">Close</button>
    </div>
</div>"#;

pub const NOT_FOUND: &str = "Not found";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn index_page() -> &'static str {
    INDEX_PAGE
}

pub fn modal() -> &'static str {
    MODAL
}

pub fn contact_item(contact: &Contact) -> String {
    format!(
        r#"<li class="grid">
    <span>{name}</span>
    <div class="grid">
        <span>{phone}</span>
        <span>{email}</span>
    </div>
</li>"#,
        name = escape_html(&contact.name),
        phone = escape_html(&contact.phone),
        email = escape_html(&contact.email),
    )
}

/// No matches renders the "Not found" text; callers handle the empty-query case.
pub fn search_results(matches: &[Contact]) -> String {
    if matches.is_empty() {
        return NOT_FOUND.to_string();
    }
    let items: String = matches.iter().map(contact_item).collect();
    format!("<ul>{}</ul>", items)
}

pub fn contact_row(contact: &Contact, class: &str) -> String {
    let id = contact.id;
    let name = escape_html(&contact.name);
    format!(
        r#"<tr class="{class}">
    <td scope="row">
        <label for="ids">
            <input type='checkbox' name='ids' value='{id}'>
        </label>
    </td>
    <td>{name}</td>
    <td>{phone}</td>
    <td>{email}</td>
    <td>{status}</td>
    <td>
        <button hx-delete="/contact/{id}" class="contrast" data-tooltip="Remove {name}?" data-placement="left">
            {icon}
        </button>
    </td>
</tr>"#,
        class = class,
        id = id,
        name = name,
        phone = escape_html(&contact.phone),
        email = escape_html(&contact.email),
        status = contact.status,
        icon = DELETE_ICON,
    )
}

/// Rows for every contact; the ones in `changed` get `class` so the front end
/// can flash them.
pub fn contact_rows(contacts: &[Contact], changed: &HashSet<ContactId>, class: &str) -> String {
    contacts
        .iter()
        .map(|c| {
            let row_class = if changed.contains(&c.id) { class } else { "" };
            contact_row(c, row_class)
        })
        .collect()
}

pub fn contacts_table(contacts: &[Contact]) -> String {
    let rows = contact_rows(contacts, &HashSet::new(), "");
    format!(
        r#"<figure>
    <table class="striped">
        <thead>
            <tr>
                <th scope="col"></th>
                <th scope="col">Name</th>
                <th scope="col">Phone</th>
                <th scope="col">Email</th>
                <th scope="col">Status</th>
                <th scope="col"></th>
            </tr>
        </thead>
        <tbody id="tbody" hx-confirm="Are you sure?" hx-target="closest tr" hx-swap="outerHTML swap:1s">
            {rows}
        </tbody>
    </table>
</figure>"#,
        rows = rows
    )
}

pub fn count(n: usize, label: &str) -> String {
    format!("{} {}", n, label)
}

pub fn email_feedback(check: EmailCheck) -> String {
    let (state, message) = match check {
        EmailCheck::Valid => ("valid", "Email is available"),
        EmailCheck::InvalidFormat => ("invalid", "Please enter a valid email address"),
        EmailCheck::Duplicate => ("duplicate", "That email is already taken"),
    };
    format!(
        r#"<small id="email-feedback" class="email-{}">{}</small>"#,
        state, message
    )
}
