use serde::Serialize;

use super::sink::StepSink;
use super::step::Step;
use crate::error::{TraceError, TraceResult};

/// A fully materialized run with a playback cursor.
///
/// `position` counts how many steps have been applied: `0` is before the
/// first step, `len()` is after the last. Moving the cursor never touches
/// the graph or the algorithm again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
	steps: Vec<Step>,
	#[serde(skip)]
	position: usize,
}

impl Trace {
	/// Drive `producer` to completion and keep every step it emits.
	pub fn record(producer: impl FnOnce(&mut dyn StepSink)) -> Self {
		let mut steps: Vec<Step> = Vec::new();
		producer(&mut steps);
		Self::from_steps(steps)
	}

	/// Wrap an already collected step list, cursor at the start.
	pub fn from_steps(steps: Vec<Step>) -> Self {
		Self { steps, position: 0 }
	}

	/// All steps in emission order.
	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// True for a run that emitted nothing.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Number of steps applied so far.
	pub fn position(&self) -> usize {
		self.position
	}

	/// The most recently applied step.
	pub fn current(&self) -> Option<&Step> {
		self.position.checked_sub(1).and_then(|i| self.steps.get(i))
	}

	/// The last step of the run, regardless of the cursor.
	pub fn last(&self) -> Option<&Step> {
		self.steps.last()
	}

	/// True once every step has been applied.
	pub fn is_finished(&self) -> bool {
		self.position == self.steps.len()
	}

	/// Apply the next step and return it. `None` at the end.
	pub fn step_forward(&mut self) -> Option<&Step> {
		if self.is_finished() {
			return None;
		}
		self.position += 1;
		self.current()
	}

	/// Undo the last applied step. Returns the step now current, which is
	/// `None` once back at the start.
	pub fn step_back(&mut self) -> Option<&Step> {
		self.position = self.position.saturating_sub(1);
		self.current()
	}

	/// Move the cursor so that exactly `position` steps are applied.
	pub fn jump_to(&mut self, position: usize) -> TraceResult<Option<&Step>> {
		if position > self.steps.len() {
			return Err(TraceError::OutOfRange {
				index: position,
				len: self.steps.len(),
			});
		}
		self.position = position;
		Ok(self.current())
	}

	/// Back to the start.
	pub fn reset(&mut self) {
		self.position = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn trace(n: usize) -> Trace {
		Trace::record(|sink| {
			for i in 0..n {
				sink.emit(Step::summary(i as f64, format!("step {i}")));
			}
		})
	}

	#[test]
	fn test_record_materializes_everything() {
		let t = trace(4);
		assert_eq!(t.len(), 4);
		assert_eq!(t.position(), 0);
		assert!(t.current().is_none());
		assert_eq!(t.last().and_then(Step::total_weight), Some(3.0));
	}

	#[test]
	fn test_forward_and_back() {
		let mut t = trace(2);
		assert_eq!(t.step_forward().map(Step::message), Some("step 0"));
		assert_eq!(t.step_forward().map(Step::message), Some("step 1"));
		assert!(t.is_finished());
		assert!(t.step_forward().is_none());
		assert_eq!(t.position(), 2);

		assert_eq!(t.step_back().map(Step::message), Some("step 0"));
		assert!(t.step_back().is_none());
		assert!(t.step_back().is_none());
		assert_eq!(t.position(), 0);
	}

	#[test]
	fn test_jump_and_reset() {
		let mut t = trace(5);
		let msg = t.jump_to(3).unwrap().map(|s| s.message().to_string());
		assert_eq!(msg.as_deref(), Some("step 2"));
		assert!(t.jump_to(5).unwrap().is_some());
		assert!(matches!(
			t.jump_to(6),
			Err(TraceError::OutOfRange { index: 6, len: 5 })
		));
		assert_eq!(t.position(), 5);
		t.reset();
		assert_eq!(t.position(), 0);
	}

	#[test]
	fn test_empty_trace() {
		let mut t = trace(0);
		assert!(t.is_empty());
		assert!(t.is_finished());
		assert!(t.step_forward().is_none());
		assert!(t.jump_to(0).unwrap().is_none());
	}
}
