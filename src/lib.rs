pub mod cs;
pub mod error;

pub use cs::linked_list;
pub use cs::linked_list::SinglyLinkedList;
pub use error::{ListError, Result};
