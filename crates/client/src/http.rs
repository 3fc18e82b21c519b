//! REST implementation of [`AdminApi`].

use crate::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::AdminApi;
use async_trait::async_trait;
use memoraid_core::constants::USERS_BASE_PATH;
use memoraid_core::{ApprovalAction, ConsoleConfig};
use memoraid_types::{
    AccountStatus, AdminStats, Alert, AlertStatus, Inquiry, InquiryUpdate, LinkRequest, RecordId,
    User,
};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: AccountStatus,
}

#[derive(Serialize)]
struct ActionBody {
    action: ApprovalAction,
}

#[derive(Serialize)]
struct AlertStatusBody {
    status: AlertStatus,
}

/// HTTP client for the admin endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use memoraid_client::{AdminApi, HttpAdminApi};
/// use memoraid_core::ConsoleConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = HttpAdminApi::new(&ConsoleConfig::default())?;
/// let pending = api.list_pending_approvals().await?;
/// println!("{} requests awaiting review", pending.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HttpAdminApi {
    base_url: String,
    client: Client,
}

impl HttpAdminApi {
    pub fn new(config: &ConsoleConfig) -> ClientResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        match config.access_token() {
            Some(token) => {
                let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ClientError::InvalidToken)?;
                headers.insert(header::AUTHORIZATION, value);
            }
            None => tracing::warn!("no access token configured; admin requests will be anonymous"),
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            base_url: format!("{}{}", config.api_base_url(), USERS_BASE_PATH),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "admin api request");
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> ClientResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::error!(path, "authentication failed - token may be invalid or expired");
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.request(Method::GET, path), path).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;
        decode(path, &bytes)
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<()> {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder, path).await?;
        Ok(())
    }
}

/// Decode a JSON body, reporting the path of the first field that does not match.
fn decode<T: DeserializeOwned>(path: &str, bytes: &[u8]) -> ClientResult<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let location = err.path().to_string();
        let location = if location.is_empty() || location == "." {
            "<root>".to_string()
        } else {
            location
        };
        ClientError::Decode {
            path: path.to_string(),
            location,
            message: err.into_inner().to_string(),
        }
    })
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn stats(&self) -> ClientResult<AdminStats> {
        self.get_json(endpoints::STATS).await
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get_json(endpoints::USERS).await
    }

    async fn activate_user(&self, id: RecordId) -> ClientResult<()> {
        tracing::info!(user_id = id, "activating user");
        self.send_json::<()>(Method::POST, &endpoints::activate_user(id), None)
            .await
    }

    async fn set_user_status(&self, id: RecordId, status: AccountStatus) -> ClientResult<()> {
        tracing::info!(user_id = id, %status, "setting user status");
        self.send_json(
            Method::POST,
            &endpoints::user_status(id),
            Some(&StatusBody { status }),
        )
        .await
    }

    async fn list_pending_approvals(&self) -> ClientResult<Vec<LinkRequest>> {
        self.get_json(endpoints::PENDING_APPROVALS).await
    }

    async fn list_approval_history(&self) -> ClientResult<Vec<LinkRequest>> {
        self.get_json(endpoints::APPROVAL_HISTORY).await
    }

    async fn process_approval(&self, id: RecordId, action: ApprovalAction) -> ClientResult<()> {
        tracing::info!(request_id = id, %action, "processing link request");
        self.send_json(
            Method::POST,
            &endpoints::approval(id),
            Some(&ActionBody { action }),
        )
        .await
    }

    async fn list_alerts(&self) -> ClientResult<Vec<Alert>> {
        self.get_json(endpoints::ALERTS).await
    }

    async fn mark_alert_handled(&self, id: RecordId) -> ClientResult<()> {
        tracing::info!(alert_id = id, "marking alert handled");
        self.send_json(
            Method::PATCH,
            &endpoints::alert(id),
            Some(&AlertStatusBody {
                status: AlertStatus::Handled,
            }),
        )
        .await
    }

    async fn list_inquiries(&self) -> ClientResult<Vec<Inquiry>> {
        self.get_json(endpoints::INQUIRIES).await
    }

    async fn update_inquiry(&self, id: RecordId, update: &InquiryUpdate) -> ClientResult<()> {
        tracing::info!(inquiry_id = id, status = %update.status, "updating inquiry");
        self.send_json(Method::PATCH, &endpoints::inquiry(id), Some(update))
            .await
    }
}
