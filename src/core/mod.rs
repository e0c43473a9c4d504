pub mod energy;
pub mod foods;
pub mod input;
pub mod scaling;
pub mod session;
pub mod store;
pub mod summary;
pub mod tracker;
