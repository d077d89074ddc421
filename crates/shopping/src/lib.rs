pub mod aggregation;

pub use aggregation::{ShoppingList, compute, compute_sequence};
