pub mod page_header;
pub mod stat_card;
pub mod tab_strip;
pub mod table;
pub mod ui;

pub use page_header::PageHeader;
pub use stat_card::{StatCard, StatTone};
pub use tab_strip::{TabItem, TabStrip};
