//! A Table Like Grid Layout
//!
//! Unlike the table layout this will not handle things such as multiple pages
pub mod builder;
pub mod column;
pub mod row;
pub mod style;
