//! Authorization
//!
//! Authentication happens elsewhere; this module only decides whether an
//! already identified actor may proceed.

pub mod rbac;
