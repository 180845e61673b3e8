//! Contact form posting to a JSON form-relay endpoint.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

const SUBJECT: &str = "New Portfolio Contact Message";

/// How long the sent/failed label stays on the button.
const RESULT_HOLD: Duration = Duration::from_millis(3000);

/// JSON body understood by the relay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
	#[serde(rename = "_subject")]
	pub subject: String,
}

impl ContactMessage {
	pub fn new(name: String, email: String, message: String) -> Self {
		Self {
			name,
			email,
			message,
			subject: SUBJECT.to_string(),
		}
	}
}

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
	#[error("request failed: {0}")]
	Network(String),
	#[error("relay answered with status {0}")]
	Rejected(u16),
	#[error("could not encode message: {0}")]
	Encode(#[from] serde_json::Error),
}

impl From<JsValue> for SubmitError {
	fn from(value: JsValue) -> Self {
		SubmitError::Network(format!("{:?}", value))
	}
}

/// Button state across one submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
	#[default]
	Idle,
	Sending,
	Sent,
	Failed,
}

impl SubmitState {
	pub fn icon_class(self) -> &'static str {
		match self {
			SubmitState::Idle => "fas fa-paper-plane",
			SubmitState::Sending => "fas fa-spinner fa-spin",
			SubmitState::Sent => "fas fa-check",
			SubmitState::Failed => "fas fa-exclamation-triangle",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			SubmitState::Idle => "Send Message",
			SubmitState::Sending => "Sending...",
			SubmitState::Sent => "Message Sent!",
			SubmitState::Failed => "Failed, try email",
		}
	}

	/// Only an idle form takes a new submission; the button stays locked
	/// through sending and the result hold.
	pub fn accepts_submit(self) -> bool {
		self == SubmitState::Idle
	}
}

/// POST `message` as JSON to `endpoint`.
pub async fn submit(endpoint: &str, message: &ContactMessage) -> Result<(), SubmitError> {
	let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
	let body = serde_json::to_string(message)?;

	let headers = Headers::new()?;
	headers.set("Content-Type", "application/json")?;
	headers.set("Accept", "application/json")?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_headers(&headers);
	init.set_body(&JsValue::from_str(&body));

	let request = Request::new_with_str_and_init(endpoint, &init)?;
	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;

	if response.ok() {
		Ok(())
	} else {
		Err(SubmitError::Rejected(response.status()))
	}
}

/// Name/email/message form with inline send status.
#[component]
pub fn ContactForm(#[prop(into)] endpoint: String) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let state = RwSignal::new(SubmitState::Idle);
	let endpoint = StoredValue::new(endpoint);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if !state.get_untracked().accepts_submit() {
			return;
		}
		state.set(SubmitState::Sending);

		let payload = ContactMessage::new(
			name.get_untracked(),
			email.get_untracked(),
			message.get_untracked(),
		);
		let endpoint = endpoint.get_value();
		spawn_local(async move {
			match submit(&endpoint, &payload).await {
				Ok(()) => {
					info!("portfolio-fx: contact message sent");
					state.set(SubmitState::Sent);
					name.set(String::new());
					email.set(String::new());
					message.set(String::new());
				}
				Err(e) => {
					warn!("portfolio-fx: contact message failed: {}", e);
					state.set(SubmitState::Failed);
				}
			}
			set_timeout(move || state.set(SubmitState::Idle), RESULT_HOLD);
		});
	};

	view! {
		<form id="contactForm" class="contact-form" on:submit=on_submit>
			<input
				id="name"
				type="text"
				placeholder="Your Name"
				required
				prop:value=move || name.get()
				on:input=move |ev| name.set(event_target_value(&ev))
			/>
			<input
				id="email"
				type="email"
				placeholder="Your Email"
				required
				prop:value=move || email.get()
				on:input=move |ev| email.set(event_target_value(&ev))
			/>
			<textarea
				id="message"
				placeholder="Your Message"
				rows="5"
				required
				prop:value=move || message.get()
				on:input=move |ev| message.set(event_target_value(&ev))
			/>
			<button
				type="submit"
				class="btn btn-primary"
				style:pointer-events=move || if state.get().accepts_submit() { "" } else { "none" }
			>
				<i class=move || state.get().icon_class() />
				" "
				<span>{move || state.get().label()}</span>
			</button>
		</form>
	}
}
