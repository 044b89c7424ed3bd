//! Ports (interfaces) implemented by outer layers
//!
//! - [`roster_source::RosterSource`] — where the roster comes from
//! - [`result_exporter::ResultExporter`] — where the assignment goes
//! - [`notifier::DrawNotifier`] — phase callbacks for the presentation layer

pub mod notifier;
pub mod result_exporter;
pub mod roster_source;
