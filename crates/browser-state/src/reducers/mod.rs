pub mod content_reducer;
pub mod custom_tab_list_reducer;
pub mod download_reducer;
pub mod recently_closed_reducer;
pub mod system_reducer;
pub mod tab_list_reducer;

pub use content_reducer::reduce_content;
pub use custom_tab_list_reducer::reduce_custom_tab_list;
pub use download_reducer::reduce_download;
pub use recently_closed_reducer::reduce_recently_closed;
pub use system_reducer::reduce_system;
pub use tab_list_reducer::reduce_tab_list;
