//! Page components for the Eternal Codex.

mod article;
mod landing;

pub use article::Article;
pub use landing::Landing;
