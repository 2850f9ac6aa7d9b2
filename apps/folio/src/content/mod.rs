pub mod loader;

pub use loader::load_page_content;
