pub mod baidu_service;
pub mod entry_service;
pub mod lookup_service;
