//! Typewriter effect cycling through a list of roles.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

const TYPE_DELAY: Duration = Duration::from_millis(80);
const DELETE_DELAY: Duration = Duration::from_millis(40);
const FULL_PAUSE: Duration = Duration::from_millis(2000);
const START_DELAY: Duration = Duration::from_millis(800);

/// One update of the typed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
	pub text: String,
	/// Wait before the next tick.
	pub delay: Duration,
}

/// Types a role one character at a time, pauses, deletes it, moves on.
#[derive(Clone, Debug)]
pub struct Typewriter {
	roles: Vec<String>,
	role: usize,
	shown: usize,
	deleting: bool,
}

impl Typewriter {
	pub fn new(roles: Vec<String>) -> Self {
		Self {
			roles,
			role: 0,
			shown: 0,
			deleting: false,
		}
	}

	/// Advance by one character. `None` when there is nothing to type.
	pub fn tick(&mut self) -> Option<TypeStep> {
		let role = self.roles.get(self.role)?;
		let len = role.chars().count();

		let delay = if self.deleting {
			self.shown = self.shown.saturating_sub(1);
			if self.shown == 0 {
				self.deleting = false;
				self.role = (self.role + 1) % self.roles.len();
				TYPE_DELAY
			} else {
				DELETE_DELAY
			}
		} else {
			self.shown = (self.shown + 1).min(len);
			if self.shown == len {
				self.deleting = true;
				FULL_PAUSE
			} else {
				TYPE_DELAY
			}
		};

		Some(TypeStep {
			text: role.chars().take(self.shown).collect(),
			delay,
		})
	}
}

fn schedule(writer: Typewriter, set_text: WriteSignal<String>, delay: Duration) {
	let scheduled = set_timeout_with_handle(
		move || {
			let mut writer = writer;
			if let Some(step) = writer.tick() {
				set_text.set(step.text);
				schedule(writer, set_text, step.delay);
			}
		},
		delay,
	);
	if let Err(e) = scheduled {
		warn!("portfolio-fx: typing timer failed: {:?}", e);
	}
}

/// Text that types and deletes each role in turn, forever.
#[component]
pub fn TypingText(#[prop(into)] roles: Vec<String>) -> impl IntoView {
	let (text, set_text) = signal(String::new());
	schedule(Typewriter::new(roles), set_text, START_DELAY);

	view! {
		<span id="typingText" class="typing-text">{text}</span>
		<span class="typing-cursor" aria-hidden="true">"|"</span>
	}
}
