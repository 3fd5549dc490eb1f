// Resume data: YAML document → validated Profile record.
// Loaded fresh on every render, never cached or written back.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{load_profile, ProfileError};
pub use models::Profile;
