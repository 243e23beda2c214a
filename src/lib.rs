//! Local listing store for the GetHome property app: listings and the user
//! profile, persisted to key-value storage, plus the explore-page filter.

pub mod config;
pub mod countries;
pub mod draft;
pub mod models;
pub mod search;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Country, Property, Purpose, UserProfile};
pub use search::{filter, SearchQuery};
pub use store::{ListingStore, SharedStore, StoreEvent};
