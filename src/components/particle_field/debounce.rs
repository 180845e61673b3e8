//! Trailing-edge debounce: a pending timer token with cancel-and-reschedule.
//!
//! The debouncer owns neither a clock nor a timer. On each event the host
//! calls [`Debouncer::trigger`], cancels the stale timer it hands back,
//! schedules a new timer carrying the returned [`Ticket`] and reports the
//! timer through [`Debouncer::arm`]. When a timer elapses the host calls
//! [`Debouncer::fire`] with its ticket; only the newest ticket releases the
//! value, so a stale timer that slipped past cancellation is harmless.

use std::time::Duration;

/// Quiet period after the last resize before the field is regenerated.
pub const RESIZE_QUIET: Duration = Duration::from_millis(200);

/// Identifies one scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending<H, T> {
	ticket: Ticket,
	handle: Option<H>,
	value: T,
}

/// Keeps the newest value of a burst until its timer settles.
///
/// `H` is the host's timer handle, used only for cancellation.
#[derive(Debug)]
pub struct Debouncer<H, T> {
	quiet: Duration,
	issued: u64,
	pending: Option<Pending<H, T>>,
}

impl<H, T> Debouncer<H, T> {
	pub fn new(quiet: Duration) -> Self {
		Self {
			quiet,
			issued: 0,
			pending: None,
		}
	}

	pub fn quiet(&self) -> Duration {
		self.quiet
	}

	/// Record a new event. Returns the ticket for the timer about to be
	/// scheduled and the previously armed timer, which must be cancelled.
	pub fn trigger(&mut self, value: T) -> (Ticket, Option<H>) {
		self.issued += 1;
		let ticket = Ticket(self.issued);
		let stale = self.pending.take().and_then(|p| p.handle);
		self.pending = Some(Pending {
			ticket,
			handle: None,
			value,
		});
		(ticket, stale)
	}

	/// Associate the freshly scheduled timer with the pending value.
	pub fn arm(&mut self, handle: H) {
		if let Some(p) = self.pending.as_mut() {
			p.handle = Some(handle);
		}
	}

	/// A timer elapsed. Yields the pending value if `ticket` is the newest.
	pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
		let current = self.pending.as_ref().is_some_and(|p| p.ticket == ticket);
		if !current {
			return None;
		}
		self.pending.take().map(|p| p.value)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}
