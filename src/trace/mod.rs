//! Step records, sinks and the materialized trace.

mod player;
mod sink;
mod step;

pub use player::Trace;
pub use sink::{StepSink, Tally};
pub use step::{EdgeRef, Partition, Side, Step, StepKind};
