/*! testing - In-memory fakes for the external contracts, exposed for this crate's own tests and for downstream integration tests. */

pub mod mock;
