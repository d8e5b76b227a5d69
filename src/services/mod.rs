// Services - page loading for the public site and validated admin writes
pub mod admin_service;
pub mod page_service;

pub use admin_service::AdminService;
pub use page_service::{PageService, PageView};
