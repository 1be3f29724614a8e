pub mod directory;
pub mod query;
pub mod store;

pub use crate::domain::model::{
    Contact, ContactId, ContactStatus, EmailCheck, ImportedUser, NewContact, SearchOutcome,
};
pub use crate::domain::ports::{ConfigProvider, UserSource};
pub use crate::utils::error::Result;
