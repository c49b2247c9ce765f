pub mod carousel_handler;
pub mod contact_handler;
pub mod menu_handler;
pub mod quit_handler;
pub mod scroll_handler;

pub use carousel_handler::CarouselHandler;
pub use contact_handler::ContactFormHandler;
pub use menu_handler::MenuHandler;
pub use quit_handler::QuitHandler;
pub use scroll_handler::PageScrollHandler;
