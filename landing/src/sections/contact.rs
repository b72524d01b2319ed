//! "Ready to Shine?" contact section and its lead form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::components::Icon;
use crate::components::icons::ICON_CHECK_CIRCLE;
use crate::config::{FormSettings, SiteConfig};
use crate::contact::{
    ContactSubmission, ERROR_MESSAGE, FIELDS, FetchBackend, FormStatus, SUCCESS_MESSAGE,
    submit_contact,
};
use crate::error::SubmitError;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact fade-in">
            <div class="contact-grid-bg"></div>
            <div class="container contact-inner">
                <div class="contact-card">
                    <div class="contact-header">
                        <h2 class="section-title">"Ready to Shine?"</h2>
                        <p class="muted">
                            "Contact us today for a quote on your polishing and buffing needs."
                        </p>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

/// The lead form. Status only moves on a finished submission; inputs are left as typed.
#[component]
fn ContactForm() -> impl IntoView {
    let config = SiteConfig::current();
    let status = RwSignal::new(FormStatus::Idle);
    let settings = config.form.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok());
        let Some(form) = form else {
            return;
        };

        let submission = match read_form(&form, &settings) {
            Ok(submission) => submission,
            Err(err) => {
                tracing::warn!(%err, "could not read contact form");
                status.set(FormStatus::Error);
                return;
            }
        };

        let settings = settings.clone();
        spawn_local(async move {
            let backend = FetchBackend::new(&settings);
            let outcome = submit_contact(&backend, &submission, &settings).await;
            if let Err(err) = &outcome {
                tracing::warn!(%err, "contact form submission failed");
            }
            // Visitor may have navigated away; then there is nobody to tell.
            let _ = status.try_set(FormStatus::from_outcome(&outcome));
        });
    };

    let FormSettings {
        endpoint,
        name: form_name,
        honeypot,
    } = config.form;

    view! {
        <form
            name=form_name.clone()
            method="POST"
            action=endpoint.clone()
            data-netlify="true"
            netlify-honeypot=honeypot.clone()
            class="contact-form"
            on:submit=on_submit
        >
            <input type="hidden" name="form-name" value=form_name.clone() />
            <p class="visually-hidden">
                <label>
                    "Don\u{2019}t fill this out: "
                    <input name=honeypot.clone() tabindex="-1" autocomplete="off" />
                </label>
            </p>

            <div class="form-row">
                <div class="form-field">
                    <label for="contact-name">"Name"</label>
                    <input id="contact-name" type="text" name="name" required=true placeholder="Your Name" />
                </div>
                <div class="form-field">
                    <label for="contact-company">"Company"</label>
                    <input id="contact-company" type="text" name="company" placeholder="Company Name" />
                </div>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for="contact-email">"Email"</label>
                    <input id="contact-email" type="email" name="email" required=true placeholder="email@example.com" />
                </div>
                <div class="form-field">
                    <label for="contact-phone">"Phone"</label>
                    <input id="contact-phone" type="tel" name="phone" placeholder="(555) 123-4567" />
                </div>
            </div>

            <div class="form-field">
                <label for="contact-message">"Project Details"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    required=true
                    rows="5"
                    placeholder="Tell us about your project..."
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>

            <FormStatusMessage status=status.read_only() />
        </form>
    }
}

/// Confirmation or fallback line under the submit button.
#[component]
pub fn FormStatusMessage(#[prop(into)] status: Signal<FormStatus>) -> impl IntoView {
    let phones = SiteConfig::current().phones;

    view! {
        <Show when=move || status.get() == FormStatus::Success>
            <div class="form-status success" role="status">
                <Icon path=ICON_CHECK_CIRCLE size="16" />
                <span>{SUCCESS_MESSAGE}</span>
            </div>
        </Show>
        <Show when=move || status.get() == FormStatus::Error>
            <div class="form-status error" role="alert">
                <p>{ERROR_MESSAGE}</p>
                <p class="form-status-phones">
                    {phones
                        .iter()
                        .map(|phone| {
                            let text = format!("{}: {}", phone.label, phone.display);
                            view! { <a href=phone.tel_href()>{text}</a> }
                        })
                        .collect_view()}
                </p>
            </div>
        </Show>
    }
}

/// Pull the named fields (and the honeypot) off the submitted form.
fn read_form(
    form: &HtmlFormElement,
    settings: &FormSettings,
) -> Result<ContactSubmission, SubmitError> {
    let data =
        FormData::new_with_form(form).map_err(|e| SubmitError::Request(format!("{e:?}")))?;
    let pairs = FIELDS
        .iter()
        .copied()
        .chain(std::iter::once(settings.honeypot.as_str()))
        .map(|name| (name, data.get(name).as_string().unwrap_or_default()));
    Ok(ContactSubmission::from_pairs(pairs, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_status(status: FormStatus) -> String {
        let status = RwSignal::new(status);
        view! { <FormStatusMessage status=status /> }.to_html()
    }

    #[test]
    fn idle_shows_no_message() {
        let html = render_status(FormStatus::Idle);
        assert!(!html.contains("Message sent!"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn success_shows_confirmation() {
        let html = render_status(FormStatus::Success);
        assert!(html.contains("Message sent!"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn error_shows_fallback_with_phones() {
        let html = render_status(FormStatus::Error);
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains("tel:6168225300"));
        assert!(html.contains("tel:6168908901"));
        assert!(!html.contains("Message sent!"));
    }

    #[test]
    fn form_carries_backend_markers_and_required_fields() {
        let html = view! { <ContactSection /> }.to_html();
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("data-netlify=\"true\""));
        assert!(html.contains("name=\"form-name\""));
        assert!(html.contains("name=\"bot-field\""));
        for field in FIELDS {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
        assert_eq!(html.matches("required").count(), 3);
    }
}
