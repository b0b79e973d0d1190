//! Stores are for loading/storing different kinds of data.
//!
//! Currently, all stores are just simple files, mostly CSV.
pub mod csv;
pub mod line_items;
pub mod summary;
