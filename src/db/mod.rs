//! Persistence layer for the single local session.
//!
//! The whole session lives in one [`SessionDocument`]. Stores only know how
//! to read, replace and drop that document; every higher-level operation is
//! derived from those and performs exactly one write, so the user record and
//! the activity of an award land together or not at all.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{Activity, User};
use crate::services::ledger::ActivityLedger;
use serde::{Deserialize, Serialize};

/// Record keys, shared with the browser storage layout.
///
/// These are the `serde(rename)` names of the [`SessionDocument`] fields.
pub mod keys {
    pub const USER: &str = "communityUser";
    pub const ACTIVITIES: &str = "userActivities";
}

/// Everything persisted for the local session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    #[serde(rename = "communityUser", default)]
    pub user: Option<User>,
    #[serde(rename = "userActivities", default)]
    pub activities: ActivityLedger,
}

/// Durable storage for the user record and the activity ledger.
pub trait SessionStore {
    /// Read the stored document; an absent store reads as empty.
    fn load_document(&self) -> Result<SessionDocument>;

    /// Replace the stored document in a single write.
    fn write_document(&self, document: &SessionDocument) -> Result<()>;

    /// Remove the user and all activities.
    fn clear_all(&self) -> Result<()> {
        self.write_document(&SessionDocument::default())
    }

    fn load_user(&self) -> Result<Option<User>> {
        Ok(self.load_document()?.user)
    }

    fn save_user(&self, user: &User) -> Result<()> {
        let mut document = self.load_document()?;
        document.user = Some(user.clone());
        self.write_document(&document)
    }

    /// Stored activities, newest first.
    fn load_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.load_document()?.activities.list())
    }

    fn append_activity(&self, activity: &Activity) -> Result<()> {
        let mut document = self.load_document()?;
        document.activities.append(activity.clone());
        self.write_document(&document)
    }

    /// Store an updated user together with the activity that produced it.
    fn apply_progression(&self, user: &User, activity: &Activity) -> Result<()> {
        let mut document = self.load_document()?;
        document.user = Some(user.clone());
        document.activities.append(activity.clone());
        self.write_document(&document)
    }

    /// Replace everything stored with a new user and their first activity.
    fn start_session(&self, user: &User, activity: &Activity) -> Result<()> {
        let mut activities = ActivityLedger::new();
        activities.append(activity.clone());
        self.write_document(&SessionDocument {
            user: Some(user.clone()),
            activities,
        })
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load_document(&self) -> Result<SessionDocument> {
        (**self).load_document()
    }

    fn write_document(&self, document: &SessionDocument) -> Result<()> {
        (**self).write_document(document)
    }

    fn clear_all(&self) -> Result<()> {
        (**self).clear_all()
    }
}
