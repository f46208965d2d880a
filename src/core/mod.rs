pub mod activities;
pub mod campers;
pub mod signups;
pub mod store;
