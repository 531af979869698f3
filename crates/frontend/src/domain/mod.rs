pub mod documents;
pub mod home;
pub mod new_cargo;
pub mod notifications;
pub mod orders;
pub mod profile;
pub mod profile_level;
pub mod rating;
pub mod reviews;
pub mod search;
pub mod stats;
pub mod templates;
pub mod tracking;
pub mod vehicles;
pub mod wallet;
