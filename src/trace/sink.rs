use super::step::{Step, StepKind};

/// Receiver for steps as an algorithm produces them.
///
/// Algorithms hold their working state in locals and push each step here
/// the moment it happens. A sink that stops caring can simply drop what it
/// gets; producers own no resources that need cleanup.
pub trait StepSink {
	/// Accept the next step.
	fn emit(&mut self, step: Step);
}

impl StepSink for Vec<Step> {
	fn emit(&mut self, step: Step) {
		self.push(step);
	}
}

/// Sink that counts steps per kind without keeping them.
#[derive(Debug, Default)]
pub struct Tally {
	counts: Vec<(StepKind, usize)>,
}

impl Tally {
	/// Steps seen of `kind`.
	pub fn count(&self, kind: StepKind) -> usize {
		self.counts
			.iter()
			.find(|(k, _)| *k == kind)
			.map_or(0, |(_, n)| *n)
	}

	/// Steps seen in total.
	pub fn total(&self) -> usize {
		self.counts.iter().map(|(_, n)| n).sum()
	}
}

impl StepSink for Tally {
	fn emit(&mut self, step: Step) {
		let kind = step.kind();
		match self.counts.iter_mut().find(|(k, _)| *k == kind) {
			Some((_, n)) => *n += 1,
			None => self.counts.push((kind, 1)),
		}
	}
}
