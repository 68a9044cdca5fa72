//! Metrics logger with incremental summaries.
//!
//! A training loop registers attributes with [`MetricsLogger::add_attribute`],
//! feeds values with [`MetricsLogger::put`] and periodically calls
//! [`MetricsLogger::summarize`]. Each attribute keeps a cursor, so that an
//! incremental summary only reduces values logged since the previous one.
//!
//! * [`MetricsLogger`] - Named append-only logs and their cursors
//! * [`Reducer`] - A named reduction function, e.g. [`Reducer::mean`]
//! * [`SummaryQuery`] - Which attributes to summarize and over which window
//! * [`Summary`] - Ordered `(label, value)` pairs with a formatted display
mod base;
mod reducer;
mod summary;
pub use base::MetricsLogger;
pub use reducer::Reducer;
pub use summary::{Summary, SummaryQuery};
