//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use portfolio_fx::{App, init_logging, theme};

fn main() {
	init_logging();
	theme::restore();

	mount_to_body(|| {
		view! { <App /> }
	})
}
