//! Data models for upload ingestion

pub mod attributes;
pub mod destination;
pub mod document;
pub mod item_group;
pub mod report;
pub mod resource_kind;

pub use attributes::DirectoryAttributes;
pub use destination::DestinationFolders;
pub use document::AssembledDocument;
pub use item_group::ItemGroup;
pub use report::{IngestReport, SinkOutcome};
pub use resource_kind::{Collection, ResourceKind};
