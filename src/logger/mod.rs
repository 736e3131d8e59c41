pub mod loading_indicator;
pub mod page_printer;
