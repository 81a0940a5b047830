use std::time::Duration;

use serde_json::Value;

use crate::{ChatRequest, FailureKind, TransportError, UploadBundle};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Reply keys probed in order on a 2xx body. Both observed server
    /// variants are covered by the default.
    pub reply_keys: Vec<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            reply_keys: vec!["reply".to_string(), "answer".to_string()],
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send_chat(&self, text: &str) -> Result<String, TransportError>;
    async fn send_upload(&self, bundle: UploadBundle) -> Result<(), TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: ClientSettings,
    chat_url: url::Url,
    upload_url: url::Url,
}

impl ReqwestTransport {
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let chat_url = endpoint_url(&settings.base_url, "chat")?;
        let upload_url = endpoint_url(&settings.base_url, "upload")?;
        Ok(Self {
            settings,
            chat_url,
            upload_url,
        })
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))
    }
}

fn endpoint_url(base: &str, path: &str) -> Result<url::Url, TransportError> {
    url::Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))
        .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send_chat(&self, text: &str) -> Result<String, TransportError> {
        let client = self.build_client()?;
        let response = client
            .post(self.chat_url.clone())
            .json(&ChatRequest {
                message: text.to_owned(),
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let server_message = read_error_field(response).await;
            return Err(TransportError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    server_message,
                },
                status.to_string(),
            ));
        }

        let body: Value = response.json().await.map_err(map_reqwest_error)?;
        for key in &self.settings.reply_keys {
            if let Some(reply) = body.get(key).and_then(Value::as_str) {
                return Ok(reply.to_owned());
            }
        }
        Err(TransportError::new(
            FailureKind::MalformedReply,
            "response carries no reply field",
        ))
    }

    async fn send_upload(&self, bundle: UploadBundle) -> Result<(), TransportError> {
        let client = self.build_client()?;
        let response = client
            .post(self.upload_url.clone())
            .multipart(bundle.into_form())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let server_message = read_error_field(response).await;
            return Err(TransportError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    server_message,
                },
                status.to_string(),
            ));
        }
        // The body is ignored beyond the status line.
        Ok(())
    }
}

async fn read_error_field(response: reqwest::Response) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    body.get("error").and_then(Value::as_str).map(str::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return TransportError::new(FailureKind::MalformedReply, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
