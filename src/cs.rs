pub mod linked_list;

// Re-export all modules
pub use linked_list::*;
