// Components module

pub mod collection_form;
pub mod global_attributes;
pub mod item_details;
pub mod item_grid;
pub mod item_preview;
pub mod preview;
pub mod upload_zone;

pub use collection_form::CollectionForm;
pub use global_attributes::GlobalAttributes;
pub use item_details::ItemDetails;
pub use item_grid::ItemGrid;
pub use item_preview::ItemPreview;
pub use preview::PreviewPage;
pub use upload_zone::UploadZone;
