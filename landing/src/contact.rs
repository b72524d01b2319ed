//! Contact form submission.
//!
//! The form is posted urlencoded to an external form backend. There is no
//! retry and no queue: the outcome only decides which message the form shows.

use url::form_urlencoded;

use crate::config::FormSettings;
use crate::error::SubmitError;

/// Message shown after the backend accepted the submission.
pub const SUCCESS_MESSAGE: &str = "Message sent! We\u{2019}ll get back to you soon.";
/// Message shown for any failure.
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again, or call/text us.";

/// Field names, in the order they are encoded.
pub const FIELDS: [&str; 5] = ["name", "company", "email", "phone", "message"];

/// What the form shows under the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl FormStatus {
    /// Terminal status for a finished submission. Any prior status is replaced.
    pub fn from_outcome<T>(outcome: &Result<T, SubmitError>) -> Self {
        match outcome {
            Ok(_) => FormStatus::Success,
            Err(_) => FormStatus::Error,
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Success => Some(SUCCESS_MESSAGE),
            FormStatus::Error => Some(ERROR_MESSAGE),
        }
    }
}

/// One filled-in contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Spam trap. Passed through untouched; the backend does the filtering.
    pub honeypot: String,
}

impl ContactSubmission {
    /// Build from `(field, value)` pairs as read off the form element.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, String)>,
        settings: &FormSettings,
    ) -> Self {
        let mut submission = Self::default();
        for (key, value) in pairs {
            match key {
                "name" => submission.name = value,
                "company" => submission.company = value,
                "email" => submission.email = value,
                "phone" => submission.phone = value,
                "message" => submission.message = value,
                other if other == settings.honeypot => submission.honeypot = value,
                _ => {}
            }
        }
        submission
    }

    /// `application/x-www-form-urlencoded` body, including the hidden fields.
    pub fn encode(&self, settings: &FormSettings) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("form-name", &settings.name)
            .append_pair(&settings.honeypot, &self.honeypot)
            .append_pair("name", &self.name)
            .append_pair("company", &self.company)
            .append_pair("email", &self.email)
            .append_pair("phone", &self.phone)
            .append_pair("message", &self.message)
            .finish()
    }
}

/// Transport for the encoded form body. Resolves to the HTTP status.
pub trait FormBackend {
    fn post_form(&self, body: String) -> impl Future<Output = Result<u16, SubmitError>>;
}

/// POST the submission and map the status code to success or failure.
pub async fn submit_contact<B: FormBackend>(
    backend: &B,
    submission: &ContactSubmission,
    settings: &FormSettings,
) -> Result<(), SubmitError> {
    let body = submission.encode(settings);
    let status = backend.post_form(body).await?;
    if (200..300).contains(&status) {
        tracing::info!(status, "contact form accepted");
        Ok(())
    } else {
        tracing::warn!(status, "contact form rejected");
        Err(SubmitError::Rejected(status))
    }
}

/// Browser `fetch` against the configured endpoint.
#[derive(Debug, Clone)]
pub struct FetchBackend {
    endpoint: String,
}

impl FetchBackend {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
        }
    }
}

impl FormBackend for FetchBackend {
    async fn post_form(&self, body: String) -> Result<u16, SubmitError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)
            .map_err(|e| SubmitError::Request(format!("{e:?}")))?;
        request
            .headers()
            .set("Content-Type", "application/x-www-form-urlencoded")
            .map_err(|e| SubmitError::Request(format!("{e:?}")))?;

        let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| SubmitError::Network(format!("{e:?}")))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| SubmitError::Network("response is not a Response".into()))?;

        Ok(resp.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records bodies and answers with a canned result.
    struct CannedBackend {
        answer: Result<u16, SubmitError>,
        seen: RefCell<Vec<String>>,
    }

    impl CannedBackend {
        fn new(answer: Result<u16, SubmitError>) -> Self {
            Self {
                answer,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormBackend for CannedBackend {
        async fn post_form(&self, body: String) -> Result<u16, SubmitError> {
            self.seen.borrow_mut().push(body);
            self.answer.clone()
        }
    }

    fn settings() -> FormSettings {
        SiteConfig::default().form
    }

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".into(),
            company: "Analytical Engines & Co".into(),
            email: "ada@example.com".into(),
            phone: "(616) 555-0100".into(),
            message: "200 brass handles, mirror finish".into(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn encodes_hidden_fields_first() {
        let body = filled().encode(&settings());
        assert_eq!(
            body,
            "form-name=contact&bot-field=&name=Ada+Lovelace&company=Analytical+Engines+%26+Co\
             &email=ada%40example.com&phone=%28616%29+555-0100\
             &message=200+brass+handles%2C+mirror+finish"
        );
    }

    #[test]
    fn honeypot_value_is_passed_through() {
        let mut submission = filled();
        submission.honeypot = "i am a bot".into();
        let body = submission.encode(&settings());
        assert!(body.contains("bot-field=i+am+a+bot"));
    }

    #[test]
    fn builds_from_form_pairs() {
        let settings = settings();
        let pairs = vec![
            ("form-name", "contact".to_string()),
            ("bot-field", "spam".to_string()),
            ("name", "Ada".to_string()),
            ("email", "ada@example.com".to_string()),
            ("message", "hi".to_string()),
        ];
        let submission = ContactSubmission::from_pairs(pairs, &settings);
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.company, "");
        assert_eq!(submission.honeypot, "spam");
    }

    #[test]
    fn success_response_sets_success() {
        let backend = CannedBackend::new(Ok(200));
        let outcome = block_on(submit_contact(&backend, &filled(), &settings()));
        assert_eq!(outcome, Ok(()));
        assert_eq!(FormStatus::from_outcome(&outcome), FormStatus::Success);
        assert_eq!(FormStatus::Success.message(), Some(SUCCESS_MESSAGE));
        assert_eq!(backend.seen.borrow().len(), 1);
    }

    #[test]
    fn non_2xx_sets_error() {
        let backend = CannedBackend::new(Ok(422));
        let outcome = block_on(submit_contact(&backend, &filled(), &settings()));
        assert_eq!(outcome, Err(SubmitError::Rejected(422)));
        assert_eq!(FormStatus::from_outcome(&outcome), FormStatus::Error);
    }

    #[test]
    fn network_failure_sets_error_without_retry() {
        let backend = CannedBackend::new(Err(SubmitError::Network("offline".into())));
        let outcome = block_on(submit_contact(&backend, &filled(), &settings()));
        assert_eq!(FormStatus::from_outcome(&outcome), FormStatus::Error);
        assert_eq!(FormStatus::Error.message(), Some(ERROR_MESSAGE));
        assert_eq!(backend.seen.borrow().len(), 1);
    }

    #[test]
    fn resubmitting_after_error_can_succeed() {
        let mut status = FormStatus::Idle;
        assert_eq!(status.message(), None);

        let failing = CannedBackend::new(Ok(500));
        status = FormStatus::from_outcome(&block_on(submit_contact(&failing, &filled(), &settings())));
        assert_eq!(status, FormStatus::Error);

        let working = CannedBackend::new(Ok(204));
        status = FormStatus::from_outcome(&block_on(submit_contact(&working, &filled(), &settings())));
        assert_eq!(status, FormStatus::Success);
    }
}
