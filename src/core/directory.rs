use crate::core::query::ContactQuery;
use crate::core::store::ContactStore;
use crate::core::{
    Contact, ContactId, ContactStatus, EmailCheck, ImportedUser, NewContact, SearchOutcome,
    UserSource,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle over the single process-wide [`ContactStore`].
///
/// Every mutation runs inside one write-lock scope; reads take the read lock
/// and hand back owned snapshots, so no guard outlives a call.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    store: Arc<RwLock<ContactStore>>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 啟動時呼叫一次：從來源匯入並初始化，回傳聯絡人數量
    pub async fn seed_from<S: UserSource + ?Sized>(&self, source: &S) -> usize {
        let users = source.fetch().await;
        if users.is_empty() {
            tracing::warn!("Users source returned no records, starting with an empty directory");
        }
        self.initialize(users).await
    }

    pub async fn initialize(&self, records: Vec<ImportedUser>) -> usize {
        let mut store = self.store.write().await;
        store.initialize(records);
        tracing::info!("Directory initialized with {} contacts", store.len());
        store.len()
    }

    pub async fn insert(&self, new_contact: NewContact) -> Contact {
        let mut store = self.store.write().await;
        let contact = store.insert(new_contact);
        tracing::debug!("Added contact {} ({})", contact.id, contact.status);
        contact
    }

    pub async fn delete(&self, id: &ContactId) -> bool {
        let removed = self.store.write().await.delete_by_id(id);
        tracing::debug!("Delete {} -> removed={}", id, removed);
        removed
    }

    pub async fn activate(&self, ids: &HashSet<ContactId>) -> HashSet<ContactId> {
        self.set_status(ids, ContactStatus::Active).await
    }

    pub async fn deactivate(&self, ids: &HashSet<ContactId>) -> HashSet<ContactId> {
        self.set_status(ids, ContactStatus::Inactive).await
    }

    async fn set_status(&self, ids: &HashSet<ContactId>, target: ContactStatus) -> HashSet<ContactId> {
        let changed = self.store.write().await.set_status_for_ids(ids, target);
        tracing::debug!(
            "Set {} on {} requested ids, {} changed",
            target,
            ids.len(),
            changed.len()
        );
        changed
    }

    pub async fn all(&self) -> Vec<Contact> {
        self.store.read().await.all().to_vec()
    }

    pub async fn find(&self, id: &ContactId) -> Option<Contact> {
        self.store.read().await.find_by_id(id).cloned()
    }

    pub async fn search(&self, keyword: &str) -> SearchOutcome {
        let store = self.store.read().await;
        ContactQuery::new(store.all()).search(keyword)
    }

    pub async fn count_total(&self) -> usize {
        let store = self.store.read().await;
        ContactQuery::new(store.all()).count_total()
    }

    pub async fn count_by_status(&self, status: ContactStatus) -> usize {
        let store = self.store.read().await;
        ContactQuery::new(store.all()).count_by_status(status)
    }

    pub async fn validate_email(&self, email: &str, exclude: Option<&ContactId>) -> EmailCheck {
        let store = self.store.read().await;
        ContactQuery::new(store.all()).validate_email_candidate(email, exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource(Vec<ImportedUser>);

    #[async_trait]
    impl UserSource for FixedSource {
        async fn fetch(&self) -> Vec<ImportedUser> {
            self.0.clone()
        }
    }

    fn user(name: &str, email: &str) -> ImportedUser {
        ImportedUser {
            name: name.to_string(),
            email: email.to_string(),
            phone: "000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seed_from_source() {
        let directory = ContactDirectory::new();
        let source = FixedSource(vec![user("Bob", "bob@x.com"), user("Alice", "alice@x.com")]);

        let count = directory.seed_from(&source).await;

        assert_eq!(count, 2);
        let names: Vec<String> = directory.all().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(directory.count_by_status(ContactStatus::Active).await, 2);
    }

    #[tokio::test]
    async fn test_seed_from_empty_source() {
        let directory = ContactDirectory::new();
        assert_eq!(directory.seed_from(&FixedSource(Vec::new())).await, 0);
        assert_eq!(directory.count_total().await, 0);
    }

    #[tokio::test]
    async fn test_activate_then_deactivate() {
        let directory = ContactDirectory::new();
        let contact = directory.insert(NewContact::new("Eve", "eve@x.com", "1")).await;
        let ids: HashSet<ContactId> = [contact.id].into_iter().collect();

        assert_eq!(directory.activate(&ids).await, ids);
        assert!(directory.activate(&ids).await.is_empty());
        assert_eq!(directory.find(&contact.id).await.map(|c| c.status), Some(ContactStatus::Active));

        assert_eq!(directory.deactivate(&ids).await, ids);
        assert_eq!(directory.count_by_status(ContactStatus::Inactive).await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let directory = ContactDirectory::new();
        let handle = directory.clone();

        handle.insert(NewContact::new("Zed", "zed@x.com", "1")).await;

        assert_eq!(directory.count_total().await, 1);
        assert_eq!(directory.validate_email("zed@x.com", None).await, EmailCheck::Duplicate);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_stay_sorted() {
        let directory = ContactDirectory::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let dir = directory.clone();
            handles.push(tokio::spawn(async move {
                dir.insert(NewContact::new(format!("Contact {:02}", 31 - i), "", "")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let all = directory.all().await;
        assert_eq!(all.len(), 32);
        assert!(all.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
