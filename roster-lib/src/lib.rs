// Domain modules
pub mod rank;
pub mod validation;
pub mod record;
pub mod tracer;
