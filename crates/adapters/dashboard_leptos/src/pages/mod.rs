mod home;
mod not_found;
mod workspace_create;
mod workspace_detail;

pub use home::Workspaces;
pub use not_found::NotFound;
pub use workspace_create::WorkspaceCreate;
pub use workspace_detail::WorkspaceDetail;
