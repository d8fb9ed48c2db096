/*!
process - Process descriptors, their metrics, and the process table.
*/

pub mod descriptor;
pub mod metrics;
pub mod table;

pub use descriptor::{BlockReason, ProcessDescriptor, ProcessState};
pub use metrics::ProcessMetrics;
pub use table::ProcessTable;
