// Lilipad collection wizard - Core Library

pub mod draft;
pub mod editor;
pub mod export;
pub mod locks;
pub mod models;

pub use draft::*;
pub use editor::*;
pub use export::*;
pub use locks::*;
pub use models::*;
