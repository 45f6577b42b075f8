// Application layer: interactive client session on top of the core.

pub mod session;
