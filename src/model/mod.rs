//! Plain data structures for the two managed resources, shaped like the backend's JSON.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;
