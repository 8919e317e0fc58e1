// self
use crate::obs::{FlowKind, FlowOutcome};

/// Counter incremented once per recorded flow outcome.
pub const FLOW_COUNTER: &str = "force_oauth_gate_flow_total";

/// Bumps [`FLOW_COUNTER`] labeled by `flow` + `outcome`; a no-op without the `metrics` feature.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(FLOW_COUNTER, "flow" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
	// std
	use std::sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	};
	// crates.io
	use metrics::{
		Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
	};
	// self
	use super::*;

	#[derive(Default)]
	struct SetupFailures(Arc<AtomicU64>);
	impl Recorder for SetupFailures {
		fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

		fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

		fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

		fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
			let labels = key
				.labels()
				.map(|label| (label.key().to_owned(), label.value().to_owned()))
				.collect::<Vec<_>>();
			let wanted = [
				("flow".to_owned(), "setup".to_owned()),
				("outcome".to_owned(), "failure".to_owned()),
			];

			if key.name() == FLOW_COUNTER && labels == wanted {
				Counter::from_arc(self.0.clone())
			} else {
				Counter::noop()
			}
		}

		fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
			Gauge::noop()
		}

		fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
			Histogram::noop()
		}
	}

	#[test]
	fn outcomes_are_labeled_by_flow() {
		let recorder = SetupFailures::default();

		metrics::with_local_recorder(&recorder, || {
			record_flow_outcome(FlowKind::Setup, FlowOutcome::Failure);
			record_flow_outcome(FlowKind::Setup, FlowOutcome::Success);
			record_flow_outcome(FlowKind::Exchange, FlowOutcome::Failure);
		});

		assert_eq!(recorder.0.load(Ordering::Relaxed), 1);
	}
}
