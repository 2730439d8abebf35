use super::form::LeadPayload;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode};

/// Google Apps Script web app that appends leads to the spreadsheet.
pub const LEAD_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyAu4l7mw07YMP9eaIQvPKiRYJdymhyrxsyHlULZAJkwYFzjZh5x7WAPV5x5rOb77eA/exec";

/// Shown in a blocking alert when the request could not be sent.
pub const SUBMIT_FAILED_MESSAGE: &str = "Saatmine ebaõnnestus. Palun proovi uuesti.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Destination for a packaged lead.
///
/// `Ok` only means the send did not fail at the transport level; the
/// receiver may still have rejected the record.
#[allow(async_fn_in_trait)]
pub trait LeadSink {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmitError>;
}

/// Posts the lead with the browser's `fetch` in `no-cors` mode.
///
/// Apps Script does not answer CORS preflights reliably, so the response
/// is opaque: status and body are never visible here.
pub struct FetchSink {
    endpoint: &'static str,
}

impl FetchSink {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    fn build_request(&self, body: &str) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::NoCors);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        Request::new_with_str_and_init(self.endpoint, &init)
    }
}

impl Default for FetchSink {
    fn default() -> Self {
        Self::new(LEAD_ENDPOINT)
    }
}

impl LeadSink for FetchSink {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
        let body = serde_json::to_string(payload)?;
        let request = self
            .build_request(&body)
            .map_err(|e| SubmitError::Request(describe(&e)))?;
        let window = web_sys::window().ok_or(SubmitError::NoWindow)?;

        JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| SubmitError::Network(describe(&e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{BrowserContext, ClinicSize, ContactRole, LeadForm};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<String>>,
    }

    impl LeadSink for RecordingSink {
        async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(serde_json::to_string(payload)?);
            Ok(())
        }
    }

    struct UnreachableSink;

    impl LeadSink for UnreachableSink {
        async fn deliver(&self, _payload: &LeadPayload) -> Result<(), SubmitError> {
            Err(SubmitError::Network("TypeError: Failed to fetch".to_string()))
        }
    }

    fn required_only() -> LeadForm {
        LeadForm {
            clinic_name: "Tervisekeskus OÜ".to_string(),
            contact_person: "Jaan Tamm".to_string(),
            role: Some(ContactRole::ClinicManager),
            email: "jaan@kliinik.ee".to_string(),
            clinic_size: Some(ClinicSize::UpToThree),
            ..Default::default()
        }
    }

    async fn submit<S: LeadSink>(form: &mut LeadForm, sink: &S) -> Result<(), SubmitError> {
        let ctx = BrowserContext {
            user_agent: "test-agent".to_string(),
            referrer: "https://www.google.com/".to_string(),
        };
        let Some(payload) = form.begin_submission(&ctx) else {
            return Ok(());
        };
        let outcome = sink.deliver(&payload).await;
        form.finish_submission(&outcome);
        outcome
    }

    #[tokio::test]
    async fn test_required_only_sends_one_request() {
        let sink = RecordingSink::default();
        let mut form = required_only();

        submit(&mut form, &sink).await.unwrap();

        let sent = sink.sent.borrow();
        assert_eq!(sent.len(), 1);
        let body: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(body["hardCases"], serde_json::json!([]));
        assert_eq!(body["biggestWorry"], "");
        assert_eq!(body["referrer"], "https://www.google.com/");
        assert_eq!(body["userAgent"], "test-agent");
        assert!(form.submitted);
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let sink = RecordingSink::default();
        let mut form = required_only();
        form.role = None;

        submit(&mut form, &sink).await.unwrap();

        assert!(sink.sent.borrow().is_empty());
        assert!(!form.submitted);
    }

    #[tokio::test]
    async fn test_network_failure_keeps_state() {
        let mut form = required_only();
        form.biggest_worry = "Kaebused".to_string();
        let before = form.clone();

        let err = submit(&mut form, &UnreachableSink).await.unwrap_err();

        assert!(matches!(err, SubmitError::Network(_)));
        assert!(!form.submitted);
        assert_eq!(form, before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SubmitError::NoWindow.to_string(), "no browser window available");
        assert_eq!(
            SubmitError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
    }
}
