pub mod badge_view;
pub mod empty_state;
pub mod icons;
pub mod list_utils;
pub mod theme;
