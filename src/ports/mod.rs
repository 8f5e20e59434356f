/// Ports module defining the interfaces the report pipeline depends on.
///
/// Only outbound (driven) ports exist: the CLI drives the use case directly.
pub mod outbound;
