//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use plmhub_domain::account::Account;
use plmhub_domain::error::ValidationError;
use plmhub_domain::id::WorkspaceId;
use plmhub_domain::stats::StatsOverview;
use plmhub_domain::workspace::Workspace;
use serde::{Deserialize, Serialize};

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Fetch the authenticated account.
pub async fn fetch_account() -> Result<Account, ApiError> {
    let resp = check_response(Request::get("/api/accounts/me").send().await?).await?;
    let account: Account = resp.json().await?;
    Ok(account)
}

/// Fetch the workspaces where the authenticated account is active.
pub async fn fetch_workspaces() -> Result<Vec<Workspace>, ApiError> {
    let resp = check_response(Request::get("/api/accounts/workspaces").send().await?).await?;
    let workspaces: Vec<Workspace> = resp.json().await?;
    Ok(workspaces)
}

/// Fetch a single workspace by id.
pub async fn fetch_workspace(id: &WorkspaceId) -> Result<Workspace, ApiError> {
    let url = format!("/api/workspaces/{id}");
    let resp = check_response(Request::get(&url).send().await?).await?;
    let workspace: Workspace = resp.json().await?;
    Ok(workspace)
}

/// Fetch the membership statistics snapshot for a workspace.
///
/// Each call produces a fresh snapshot; nothing is cached or deduplicated
/// on the client side.
pub async fn fetch_stats_overview(id: &WorkspaceId) -> Result<StatsOverview, ApiError> {
    let url = format!("/api/workspaces/{id}/stats-overview");
    let resp = check_response(Request::get(&url).send().await?).await?;
    let stats: StatsOverview = resp.json().await?;
    Ok(stats)
}

/// Request body for workspace creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkspaceRequest {
    pub id: String,
    pub description: String,
    pub folder_locked: bool,
}

/// Create a new workspace.
///
/// The server rejects an id that is already taken; its message is carried
/// through the JSON error body.
pub async fn create_workspace(request: &CreateWorkspaceRequest) -> Result<Workspace, ApiError> {
    let resp =
        check_response(Request::post("/api/workspaces").json(request)?.send().await?).await?;
    let workspace: Workspace = resp.json().await?;
    Ok(workspace)
}
