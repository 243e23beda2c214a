/// Outcome of a store mutation, broadcast to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created { id: String },
    Updated { id: String },
    /// Emitted even when nothing matched the id
    Deleted { id: String },
    ProfileUpdated {
        previous_name: String,
        name: String,
        relinked: usize,
    },
    AvatarUpdated,
    SignedIn,
    SignedOut,
}

impl StoreEvent {
    /// Notification text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            StoreEvent::Created { .. } => "Post Created Successfully!",
            StoreEvent::Updated { .. } => "Post Updated Successfully!",
            StoreEvent::Deleted { .. } => "Post Deleted Permanently",
            StoreEvent::ProfileUpdated { .. } => "Profile Updated",
            StoreEvent::AvatarUpdated => "Profile Photo Updated",
            StoreEvent::SignedIn => "Welcome to GetHome",
            StoreEvent::SignedOut => "Signed Out",
        }
    }
}
