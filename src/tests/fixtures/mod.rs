pub mod time_entry;
pub mod tracker;
