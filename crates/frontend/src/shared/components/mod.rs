pub mod editable_cell;
pub mod lookup_select;
pub mod pagination_controls;
pub mod status_badge;
pub mod table_checkbox;
