pub mod badge;
pub mod domain;
pub mod fixtures;
pub mod search;
