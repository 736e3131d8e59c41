pub mod class_card;
pub mod feedback_form;
pub mod feedback_item_view;
pub mod flash_message;
pub mod page_state;
pub mod select_control;
pub mod stats_view;
pub mod submit_control;
