//! 提交流程
//!
//! 校验、构造、发送、通知。

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::config::ClientConfig;
use super::http::HttpClient;
use super::notify::{Notification, Notifier};
use crate::error::InjectError;
use crate::form::{FormState, validate};
use crate::request::{InjectionRequest, build};

pub const SUCCESS_MESSAGE: &str = "Packet injected";

/// 基于注入的 HTTP 客户端与通知器的提交流程
///
/// 不记录在途请求：每次提交相互独立，各自报告结果。不重试，不设超时。
#[derive(Debug)]
pub struct Submitter<C, N> {
    config: ClientConfig,
    client: C,
    notifier: N,
}

impl<C: HttpClient, N: Notifier> Submitter<C, N> {
    pub fn new(config: ClientConfig, client: C, notifier: N) -> Self {
        Self {
            config,
            client,
            notifier,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// 校验并构造请求；失败在此处通知，且不会访问网络
    pub fn prepare(&self, state: &FormState) -> Result<InjectionRequest, InjectError> {
        let request = validate(state).and_then(|()| build(state));
        if let Err(err) = &request {
            warn!(error = %err, "表单校验失败，未发送请求");
            self.notifier.notify(Notification::Error(err.to_string()));
        }
        request
    }

    /// 发送已构造好的请求并报告结果
    #[tracing::instrument(skip(self, request), fields(kind = %request.kind, src = %request.src, dst = %request.dst))]
    pub async fn dispatch(&self, request: &InjectionRequest) -> Result<(), InjectError> {
        let outcome = self.send(request).await;
        match &outcome {
            Ok(()) => {
                info!("✅ 注入成功");
                self.notifier.notify(Notification::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                warn!(error = %err, "❌ 注入失败");
                self.notifier.notify(Notification::Error(err.to_string()));
            }
        }
        outcome
    }

    async fn send(&self, request: &InjectionRequest) -> Result<(), InjectError> {
        let body = serde_json::to_string(request)?;
        let url = self.config.endpoint_url();
        info!(url = %url, count = request.count, "📤 发送注入请求");

        let response = self.client.post_json(&url, body).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(InjectError::InjectionFailed(response.body))
        }
    }

    /// 校验、构造并发送
    pub async fn submit(&self, state: &FormState) -> Result<(), InjectError> {
        let request = self.prepare(state)?;
        self.dispatch(&request).await
    }
}

impl<C, N> Submitter<C, N>
where
    C: HttpClient + 'static,
    N: Notifier + 'static,
{
    /// 同步构造请求，然后在后台任务中发送
    ///
    /// 调用返回后不再借用表单，请求在途时表单仍可编辑。
    pub fn spawn(
        self: &Arc<Self>,
        state: &FormState,
    ) -> Result<JoinHandle<Result<(), InjectError>>, InjectError> {
        let request = self.prepare(state)?;
        let submitter = Arc::clone(self);
        Ok(tokio::spawn(async move { submitter.dispatch(&request).await }))
    }
}
