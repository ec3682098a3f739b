pub mod asset_modal;
pub mod asset_table;
pub mod delete_modal;
pub mod move_modal;

pub use asset_modal::AssetFormModal;
pub use asset_table::AssetTable;
pub use delete_modal::DeleteAssetModal;
pub use move_modal::MoveAssetModal;
