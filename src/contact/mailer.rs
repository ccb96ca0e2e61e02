use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::config;

/// Variables handed to the mail template. Field names match the template
/// placeholders, not the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub nombre: String,
    pub email: String,
    pub empresa: String,
    pub servicio: String,
    pub mensaje: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("mail client has no public key")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("mail service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// One-shot delivery of a filled-in contact form. Implementations make a
/// single attempt; retrying is up to the user.
#[cfg_attr(test, automock)]
pub trait Mailer {
    fn send(&self, params: &TemplateParams) -> LocalBoxFuture<'static, Result<(), MailError>>;
}

#[derive(Serialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

/// EmailJS REST client.
#[derive(Clone, Debug)]
pub struct EmailJsMailer {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: Option<String>,
}

impl EmailJsMailer {
    pub fn new(endpoint: &str, service_id: &str, template_id: &str, public_key: &str) -> Self {
        let public_key = if public_key.trim().is_empty() {
            warn!("EmailJS init: empty public key, contact form will not deliver");
            None
        } else {
            Some(public_key.to_string())
        };
        Self {
            endpoint: endpoint.to_string(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key,
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_mail_api_url(),
            config::emailjs_service_id(),
            config::emailjs_template_id(),
            config::emailjs_public_key(),
        )
    }

    fn request_body(&self, params: &TemplateParams) -> Option<SendRequest> {
        let user_id = self.public_key.clone()?;
        Some(SendRequest {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            user_id,
            template_params: params.clone(),
        })
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, params: &TemplateParams) -> LocalBoxFuture<'static, Result<(), MailError>> {
        let body = self.request_body(params);
        let endpoint = self.endpoint.clone();
        async move {
            let body = body.ok_or(MailError::NotConfigured)?;
            let response = Request::post(&endpoint)
                .json(&body)
                .map_err(|e| MailError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| MailError::Request(e.to_string()))?;

            if response.ok() {
                info!("Contact message delivered");
                Ok(())
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(MailError::Rejected { status, body })
            }
        }
        .boxed_local()
    }
}

/// Shared mailer that can travel through component properties.
#[derive(Clone)]
pub struct MailerHandle(pub Rc<dyn Mailer>);

thread_local! {
    static CONFIGURED: MailerHandle = MailerHandle::new(EmailJsMailer::from_config());
}

impl MailerHandle {
    pub fn new<M: Mailer + 'static>(mailer: M) -> Self {
        Self(Rc::new(mailer))
    }

    /// The EmailJS client built from config. Every call returns the same
    /// instance, so props holding it compare equal across renders.
    pub fn from_config() -> Self {
        CONFIGURED.with(Clone::clone)
    }
}

impl PartialEq for MailerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    fn params() -> TemplateParams {
        TemplateParams {
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            empresa: "ACME".into(),
            servicio: "web".into(),
            mensaje: "Necesito una landing page nueva".into(),
        }
    }

    #[test]
    fn request_body_uses_template_variable_names() {
        let mailer = EmailJsMailer::new("http://localhost/send", "svc", "tpl", "key");
        let body = mailer.request_body(&params()).unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "nombre": "Ana",
                    "email": "ana@example.com",
                    "empresa": "ACME",
                    "servicio": "web",
                    "mensaje": "Necesito una landing page nueva"
                }
            })
        );
    }

    #[test]
    fn missing_public_key_fails_at_send_time() {
        let mailer = EmailJsMailer::new("http://localhost/send", "svc", "tpl", "  ");
        assert!(mailer.request_body(&params()).is_none());
        assert_eq!(block_on(mailer.send(&params())), Err(MailError::NotConfigured));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = MailerHandle::new(EmailJsMailer::new("u", "s", "t", "k"));
        let b = MailerHandle::new(EmailJsMailer::new("u", "s", "t", "k"));
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn configured_handle_is_shared() {
        assert!(MailerHandle::from_config() == MailerHandle::from_config());
    }
}
