pub mod account;
pub mod document;
pub mod listing;
pub mod login_session;
pub mod notification;
pub mod order;
pub mod review;
pub mod team;
pub mod template;
pub mod tracking;
pub mod vehicle;
