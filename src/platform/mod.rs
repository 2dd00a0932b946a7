//! Host platform identification.
//!
//! Classifies the host operating system into the closed [`Platform`] set
//! used by the log directory resolver. The [`HostIdentity`] trait is the
//! substitution seam: production code uses [`NativeHost`], tests and the
//! `--platform` CLI override supply a fixed [`Platform`] instead.

pub mod host;

pub use host::{HostIdentity, NativeHost, Platform};
