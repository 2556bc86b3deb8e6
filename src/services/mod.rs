// Collaborators of the bookmark controller: remote store, notifications,
// clock and settings.

pub mod clock;
pub mod notification;
pub mod remote_store;
pub mod settings_engine;
