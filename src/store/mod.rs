pub mod events;
pub mod snapshot;

pub use events::StoreEvent;

use crate::models::{Property, UserProfile};
use crate::search::{self, SearchQuery};
use crate::seed;
use crate::storage::{KeyValueStorage, AUTH_KEY, PROFILE_KEY, PROPERTIES_KEY};
use rand::Rng;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

const LISTING_ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const EVENT_CAPACITY: usize = 64;

/// Store handle for hosts that share it across tasks; the mutex keeps
/// mutators from interleaving
pub type SharedStore = Arc<Mutex<ListingStore>>;

/// Fresh random base-36 identifier for a new listing
pub fn new_listing_id() -> String {
    let mut rng = rand::rng();
    (0..LISTING_ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Owner of the listing collection and the local user profile.
///
/// Every mutation goes through this type: it updates the in-memory state,
/// writes the affected keys to storage and broadcasts a [`StoreEvent`].
/// Writes are best-effort; a storage failure is logged and the in-memory
/// change stays applied.
pub struct ListingStore {
    storage: Arc<dyn KeyValueStorage>,
    /// Newest first
    properties: Vec<Property>,
    profile: UserProfile,
    authenticated: bool,
    events: broadcast::Sender<StoreEvent>,
}

impl ListingStore {
    /// Load persisted state, falling back to the seed dataset per key.
    /// Never fails: unreadable state is treated as absent.
    pub async fn initialize(storage: Arc<dyn KeyValueStorage>) -> Self {
        info!("Loading listing store from {} storage", storage.backend_name());

        let properties = load_or_else(storage.as_ref(), PROPERTIES_KEY, seed::default_properties).await;
        let properties = sanitize(properties);
        let profile = load_or_else(storage.as_ref(), PROFILE_KEY, seed::default_profile).await;

        let authenticated = match storage.get(AUTH_KEY).await {
            Ok(raw) => raw.as_deref().map(snapshot::decode_flag).unwrap_or(false),
            Err(e) => {
                warn!("Failed to read auth flag, assuming signed out: {:#}", e);
                false
            }
        };

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let mut store = Self {
            storage,
            properties,
            profile,
            authenticated,
            events,
        };
        store.refresh_listing_count();

        info!(
            "Loaded {} listings for profile '{}'",
            store.properties.len(),
            store.profile.name
        );
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Listings whose host name equals `name`, in collection order
    pub fn properties_by_owner(&self, name: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_owned_by(name)).collect()
    }

    /// Listings owned by the current profile
    pub fn my_properties(&self) -> Vec<&Property> {
        self.properties_by_owner(&self.profile.name)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&Property> {
        search::filter(&self.properties, query)
    }

    /// Replace the listing with the same id in place, or prepend it if new.
    /// An empty id is replaced with a fresh one.
    pub async fn upsert_property(&mut self, mut property: Property) -> StoreEvent {
        if property.id.is_empty() {
            property.id = new_listing_id();
            debug!("Assigned id {} to new listing", property.id);
        }
        if property.images.len() > Property::MAX_IMAGES {
            warn!(
                "Listing {} has {} images, keeping the first {}",
                property.id,
                property.images.len(),
                Property::MAX_IMAGES
            );
            property.images.truncate(Property::MAX_IMAGES);
        }

        let id = property.id.clone();
        let event = match self.properties.iter().position(|p| p.id == id) {
            Some(index) => {
                self.properties[index] = property;
                info!("Updated listing {}", id);
                StoreEvent::Updated { id }
            }
            None => {
                self.properties.insert(0, property);
                info!("Created listing {}", id);
                StoreEvent::Created { id }
            }
        };

        self.persist_properties().await;
        if self.refresh_listing_count() {
            self.persist_profile().await;
        }
        self.emit(event)
    }

    /// Remove the listing with `id`; unknown ids are a no-op
    pub async fn delete_property(&mut self, id: &str) -> StoreEvent {
        let before = self.properties.len();
        self.properties.retain(|p| p.id != id);

        if self.properties.len() < before {
            info!("Deleted listing {}", id);
            self.persist_properties().await;
            if self.refresh_listing_count() {
                self.persist_profile().await;
            }
        } else {
            debug!("Delete of unknown listing {} ignored", id);
        }

        self.emit(StoreEvent::Deleted { id: id.to_string() })
    }

    /// Change name and bio, moving every listing hosted under the old name
    /// over to the new one
    pub async fn update_profile(&mut self, name: &str, bio: &str) -> StoreEvent {
        let previous_name = std::mem::replace(&mut self.profile.name, name.to_string());
        self.profile.bio = bio.to_string();

        let mut relinked = 0;
        if previous_name != name {
            for property in self.properties.iter_mut().filter(|p| p.is_owned_by(&previous_name)) {
                property.host_name = name.to_string();
                relinked += 1;
            }
        }

        info!(
            "Profile renamed '{}' -> '{}', {} listings relinked",
            previous_name, name, relinked
        );

        self.refresh_listing_count();
        self.persist_profile().await;
        if relinked > 0 {
            self.persist_properties().await;
        }

        self.emit(StoreEvent::ProfileUpdated {
            previous_name,
            name: name.to_string(),
            relinked,
        })
    }

    pub async fn update_avatar(&mut self, avatar: &str) -> StoreEvent {
        self.profile.avatar = avatar.to_string();
        self.persist_profile().await;
        self.emit(StoreEvent::AvatarUpdated)
    }

    /// Mock sign-in: only flips the persisted flag
    pub async fn sign_in(&mut self) -> StoreEvent {
        self.set_authenticated(true).await;
        self.emit(StoreEvent::SignedIn)
    }

    pub async fn sign_out(&mut self) -> StoreEvent {
        self.set_authenticated(false).await;
        self.emit(StoreEvent::SignedOut)
    }

    /// Mock sign-up: no account is created and the profile is left alone,
    /// so it signs in exactly like `sign_in`
    pub async fn sign_up(&mut self) -> StoreEvent {
        info!("Signing up '{}'", self.profile.name);
        self.sign_in().await
    }

    async fn set_authenticated(&mut self, value: bool) {
        self.authenticated = value;
        self.write(AUTH_KEY, snapshot::encode_flag(value).to_string()).await;
    }

    /// Returns true if the informational count changed
    fn refresh_listing_count(&mut self) -> bool {
        let count = self.my_properties().len() as u32;
        let changed = self.profile.listings != count;
        self.profile.listings = count;
        changed
    }

    async fn persist_properties(&self) {
        match snapshot::encode(&self.properties) {
            Ok(raw) => self.write(PROPERTIES_KEY, raw).await,
            Err(e) => warn!("Failed to encode listings: {}", e),
        }
    }

    async fn persist_profile(&self) {
        match snapshot::encode(&self.profile) {
            Ok(raw) => self.write(PROFILE_KEY, raw).await,
            Err(e) => warn!("Failed to encode profile: {}", e),
        }
    }

    async fn write(&self, key: &str, raw: String) {
        if let Err(e) = self.storage.set(key, &raw).await {
            warn!("Failed to persist {}: {:#}", key, e);
        }
    }

    fn emit(&self, event: StoreEvent) -> StoreEvent {
        // no subscribers is fine
        let _ = self.events.send(event.clone());
        event
    }
}

async fn load_or_else<T, F>(storage: &dyn KeyValueStorage, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match storage.get(key).await {
        Ok(Some(raw)) => match snapshot::decode(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding unreadable {}, using defaults: {}", key, e);
                fallback()
            }
        },
        Ok(None) => {
            debug!("No persisted {}, seeding defaults", key);
            fallback()
        }
        Err(e) => {
            warn!("Failed to read {}, using defaults: {:#}", key, e);
            fallback()
        }
    }
}

/// Enforce collection invariants on loaded data: unique ids, image cap
fn sanitize(properties: Vec<Property>) -> Vec<Property> {
    let mut seen = HashSet::new();
    properties
        .into_iter()
        .filter_map(|mut p| {
            if !seen.insert(p.id.clone()) {
                warn!("Dropping duplicate listing {}", p.id);
                return None;
            }
            p.images.truncate(Property::MAX_IMAGES);
            Some(p)
        })
        .collect()
}
