pub mod field;
pub mod footer;
pub mod header;
pub mod input;
pub mod popover;
pub mod scrollbar;
pub mod table;
