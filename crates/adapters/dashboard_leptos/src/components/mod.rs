mod language_toggle;
mod loading;
mod nav;
mod stat_card;
mod toast;
mod workspace_item_card;

pub use language_toggle::LanguageToggle;
pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::StatCard;
pub(crate) use stat_card::region_count;
pub use toast::{ToastContainer, use_toasts};
pub use workspace_item_card::WorkspaceItemCard;
