pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;

pub const PROPERTIES_KEY: &str = "gethome_properties";
pub const PROFILE_KEY: &str = "gethome_user";
pub const AUTH_KEY: &str = "gethome_auth";
