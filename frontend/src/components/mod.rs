pub mod submit_with_loader;

pub use submit_with_loader::SubmitWithLoader;
