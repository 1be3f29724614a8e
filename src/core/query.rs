use crate::core::{Contact, ContactId, ContactStatus, EmailCheck, SearchOutcome};
use regex::Regex;
use std::sync::LazyLock;

// Anchored at both ends: a valid-looking prefix followed by anything else is rejected.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

pub fn is_email_shaped(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Read-only views over a snapshot of the contact list.
#[derive(Debug, Clone, Copy)]
pub struct ContactQuery<'a> {
    contacts: &'a [Contact],
}

impl<'a> ContactQuery<'a> {
    pub fn new(contacts: &'a [Contact]) -> Self {
        Self { contacts }
    }

    /// 名稱子字串搜尋（不分大小寫），空白關鍵字不進行搜尋
    pub fn search(&self, keyword: &str) -> SearchOutcome {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return SearchOutcome::EmptyQuery;
        }

        let needle = keyword.to_lowercase();
        let matches = self
            .contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        SearchOutcome::Matches(matches)
    }

    pub fn count_total(&self) -> usize {
        self.contacts.len()
    }

    pub fn count_by_status(&self, status: ContactStatus) -> usize {
        self.contacts.iter().filter(|c| c.status == status).count()
    }

    /// Format check first, then uniqueness against every contact other than `exclude`.
    pub fn validate_email_candidate(&self, email: &str, exclude: Option<&ContactId>) -> EmailCheck {
        let email = email.trim();
        if !is_email_shaped(email) {
            return EmailCheck::InvalidFormat;
        }

        let taken = self
            .contacts
            .iter()
            .filter(|c| Some(&c.id) != exclude)
            .any(|c| c.email.trim() == email);

        if taken {
            EmailCheck::Duplicate
        } else {
            EmailCheck::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ContactStore;
    use crate::core::{ImportedUser, NewContact};

    fn seeded() -> ContactStore {
        let mut store = ContactStore::new();
        store.initialize(vec![
            ImportedUser {
                name: "Leanne Graham".to_string(),
                email: "a@b.com".to_string(),
                phone: "1".to_string(),
            },
            ImportedUser {
                name: "Ervin Howell".to_string(),
                email: "shanna@melissa.tv".to_string(),
                phone: "2".to_string(),
            },
            ImportedUser {
                name: "Clementine Bauch".to_string(),
                email: "nathan@yesenia.net".to_string(),
                phone: "3".to_string(),
            },
        ]);
        store
    }

    #[test]
    fn test_blank_keyword_is_distinct_from_no_match() {
        let store = seeded();
        let query = ContactQuery::new(store.all());

        assert_eq!(query.search(""), SearchOutcome::EmptyQuery);
        assert_eq!(query.search("   "), SearchOutcome::EmptyQuery);
        assert_eq!(query.search("zzz-no-match"), SearchOutcome::Matches(Vec::new()));
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_only() {
        let store = seeded();
        let query = ContactQuery::new(store.all());

        let SearchOutcome::Matches(found) = query.search("  GRAHAM ") else {
            panic!("expected matches");
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Leanne Graham");

        // email-only hit must not match
        assert_eq!(query.search("melissa"), SearchOutcome::Matches(Vec::new()));
    }

    #[test]
    fn test_search_preserves_store_order() {
        let store = seeded();
        let query = ContactQuery::new(store.all());

        let SearchOutcome::Matches(found) = query.search("e") else {
            panic!("expected matches");
        };
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Clementine Bauch", "Ervin Howell", "Leanne Graham"]);
    }

    #[test]
    fn test_search_treats_keyword_literally() {
        let mut store = seeded();
        store.insert(NewContact::new("J. (Jay) Doe", "", ""));
        let query = ContactQuery::new(store.all());

        let SearchOutcome::Matches(found) = query.search("(jay)") else {
            panic!("expected matches");
        };
        assert_eq!(found.len(), 1);
        assert_eq!(query.search(".*"), SearchOutcome::Matches(Vec::new()));
    }

    #[test]
    fn test_counts_reflect_current_state() {
        let mut store = seeded();
        store.insert(NewContact::new("Zed", "z@x.com", "9"));
        let query = ContactQuery::new(store.all());

        assert_eq!(query.count_total(), 4);
        assert_eq!(query.count_by_status(ContactStatus::Active), 3);
        assert_eq!(query.count_by_status(ContactStatus::Inactive), 1);
    }

    #[test]
    fn test_email_candidate_results() {
        let store = seeded();
        let query = ContactQuery::new(store.all());

        assert_eq!(query.validate_email_candidate("not-an-email", None), EmailCheck::InvalidFormat);
        assert_eq!(query.validate_email_candidate("a@b.com", None), EmailCheck::Duplicate);
        assert_eq!(query.validate_email_candidate("new@b.com", None), EmailCheck::Valid);
        assert_eq!(query.validate_email_candidate(" new@b.com ", None), EmailCheck::Valid);
    }

    #[test]
    fn test_email_duplicate_ignores_surrounding_whitespace() {
        let mut store = ContactStore::new();
        store.initialize(vec![ImportedUser {
            name: "Padded".to_string(),
            email: " padded@x.com ".to_string(),
            phone: String::new(),
        }]);
        store.insert(NewContact::new("Spaced", " a@b.com", "1"));
        let query = ContactQuery::new(store.all());

        assert_eq!(query.validate_email_candidate("a@b.com", None), EmailCheck::Duplicate);
        assert_eq!(query.validate_email_candidate("padded@x.com ", None), EmailCheck::Duplicate);
    }

    #[test]
    fn test_email_candidate_excludes_own_contact() {
        let store = seeded();
        let owner = store
            .all()
            .iter()
            .find(|c| c.email == "a@b.com")
            .map(|c| c.id)
            .unwrap();
        let query = ContactQuery::new(store.all());

        assert_eq!(query.validate_email_candidate("a@b.com", Some(&owner)), EmailCheck::Valid);
    }

    #[test]
    fn test_email_pattern_rejects_trailing_garbage() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("first.last+tag@sub.example.org"));
        assert!(!is_email_shaped("a@b.com<script>"));
        assert!(!is_email_shaped("a@b.com extra"));
        assert!(!is_email_shaped("a@b.c"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@b"));
    }
}
