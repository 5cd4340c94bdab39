//! `contactForm.v1`: name/email/message form.
//!
//! Submitting never navigates. Field values are handed to the context's
//! [`FormTransport`](crate::context::FormTransport) and its acknowledgment
//! (or error) is written into the status line under the button.

use std::{rc::Rc, sync::Arc};

use landkit_ui::{Element, Event, attrs, h};
use tracing::{debug, warn};

use super::section;
use crate::{
    context::{ContactSubmission, FormTransport, RenderContext},
    data::Data,
    registry::Result,
};

pub fn render(d: &Data<'_>, ctx: &RenderContext) -> Result<Element> {
    let labels = d.object("fields");
    let label = |key: &str, default: &str| -> Result<String> {
        match &labels {
            Some(fields) => fields.text_or(key, default),
            None => Ok(default.to_string()),
        }
    };

    let (name_wrap, name) = field(&label("nameLabel", "Name")?, "text");
    let (email_wrap, email) = field(&label("emailLabel", "Email")?, "email");
    let (message_wrap, message) = field(&label("messageLabel", "Message")?, "textarea");

    let (button_label, variant) = match d.object("button") {
        Some(b) => (b.text_or("label", "Send")?, b.text_or("variant", "primary")?),
        None => ("Send".to_string(), "primary".to_string()),
    };
    let button = h(
        "button",
        attrs! { "class" => format!("btn {variant}"), "type" => "submit" },
        button_label,
    );
    button.set_style("border", "0");
    button.set_style("cursor", "pointer");

    let note = d
        .text("note")?
        .map(|note| h("p", attrs! { "style" => "margin-top:12px" }, note));
    let status = h("p", attrs! { "class" => "form-status", "role" => "status" }, ());

    let form = h(
        "form",
        attrs! { "class" => "form" },
        vec![
            Some(name_wrap),
            Some(email_wrap),
            Some(message_wrap),
            Some(button),
            note,
            Some(status.clone()),
        ],
    );

    let transport = Arc::clone(&ctx.transport);
    form.add_event_listener(
        "submit",
        Rc::new(move |ev: &Event| {
            ev.prevent_default();
            let submission = ContactSubmission {
                name: name.value(),
                email: email.value(),
                message: message.value(),
            };
            submit(transport.as_ref(), &submission, &status);
        }),
    );

    Ok(section(
        "section legal",
        vec![
            h("h1", attrs! {}, d.text_or("h1", "Contact")?),
            h("p", attrs! {}, d.text_or("subtitle", "")?),
            form,
        ],
    ))
}

fn submit(transport: &dyn FormTransport, submission: &ContactSubmission, status: &Element) {
    match transport.submit(submission) {
        Ok(ack) => {
            debug!(transport = ?transport, "contact form delivered");
            status.set_text_content(ack);
        }
        Err(e) => {
            warn!(error = %e, "contact form delivery failed");
            status.set_text_content(e.to_string());
        }
    }
}

/// Labelled input. `kind` is an input type, or `textarea`.
fn field(label: &str, kind: &str) -> (Element, Element) {
    let input = if kind == "textarea" {
        h("textarea", attrs! { "placeholder" => label }, ())
    } else {
        h("input", attrs! { "type" => kind, "placeholder" => label }, ())
    };
    let wrap = h(
        "div",
        attrs! { "class" => "field" },
        vec![h("label", attrs! {}, label), input.clone()],
    );
    (wrap, input)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::context::{DEMO_FORM_NOTICE, TransportError, fixed_context};

    #[derive(Debug, Default)]
    struct Recording(Mutex<Vec<ContactSubmission>>);

    impl FormTransport for Recording {
        fn submit(&self, submission: &ContactSubmission) -> std::result::Result<String, TransportError> {
            self.0.lock().unwrap().push(submission.clone());
            Ok("Thanks!".to_string())
        }
    }

    #[derive(Debug)]
    struct Down;

    impl FormTransport for Down {
        fn submit(&self, _: &ContactSubmission) -> std::result::Result<String, TransportError> {
            Err(TransportError::Failed("relay offline".to_string()))
        }
    }

    fn form_payload() -> serde_json::Value {
        json!({
            "h1": "Get in touch",
            "fields": { "nameLabel": "Your name" },
            "button": { "label": "Request demo" },
            "note": "We reply within 24h."
        })
    }

    #[test]
    fn test_labels_and_defaults() {
        let value = form_payload();
        let el = render(&Data::new("contactForm.v1", &value), &fixed_context()).unwrap();

        let labels: Vec<String> = el.query_tag("label").iter().map(Element::text_content).collect();
        assert_eq!(labels, vec!["Your name", "Email", "Message"]);
        assert_eq!(el.query_tag("textarea").len(), 1);
        assert_eq!(el.query_tag("button")[0].text_content(), "Request demo");
        assert!(el.text_content().contains("We reply within 24h."));
        assert!(el.to_html().contains(r#"style="border:0;cursor:pointer""#));
    }

    #[test]
    fn test_submit_without_transport() {
        let value = json!({});
        let el = render(&Data::new("contactForm.v1", &value), &fixed_context()).unwrap();
        let form = &el.query_tag("form")[0];

        let proceed = form.dispatch_event(&Event::submit());
        assert!(!proceed, "submission must not navigate");
        assert_eq!(el.query_class("form-status")[0].text_content(), DEMO_FORM_NOTICE);
    }

    #[test]
    fn test_submit_collects_values() {
        let transport = Arc::new(Recording::default());
        let ctx = fixed_context().with_transport(transport.clone());
        let value = form_payload();
        let el = render(&Data::new("contactForm.v1", &value), &ctx).unwrap();

        el.query_tag("input")[0].set_value("Dana");
        el.query_tag("input")[1].set_value("dana@example.com");
        el.query_tag("textarea")[0].set_value("Hello");
        el.query_tag("form")[0].dispatch_event(&Event::submit());

        let sent = transport.0.lock().unwrap();
        assert_eq!(
            sent.as_slice(),
            &[ContactSubmission {
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                message: "Hello".to_string(),
            }]
        );
        assert_eq!(el.query_class("form-status")[0].text_content(), "Thanks!");
    }

    #[test]
    fn test_transport_failure_is_shown() {
        let ctx = fixed_context().with_transport(Arc::new(Down));
        let value = json!({});
        let el = render(&Data::new("contactForm.v1", &value), &ctx).unwrap();
        el.query_tag("form")[0].dispatch_event(&Event::submit());
        assert_eq!(
            el.query_class("form-status")[0].text_content(),
            "form transport failed: relay offline"
        );
    }
}
