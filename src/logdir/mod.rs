//! Log directory resolution.
//!
//! Computes where an application should place its log files, following the
//! per-platform conventions:
//!
//! | Platform        | Root                    | Shape            |
//! |-----------------|-------------------------|------------------|
//! | Windows         | `LocalAppData` env var  | `root/app/log`   |
//! | macOS           | `HOME` env var          | `root/app/log`   |
//! | Linux, FreeBSD  | `/var/log`              | `root/app`       |
//!
//! The resolver only computes the path; it never creates or inspects the
//! directory. A missing root is an error, not a silently substituted
//! default.

pub mod resolver;

pub use resolver::{LogDirResolver, SYSLOG_ROOT, UNIX_HOME_VAR, WINDOWS_ROOT_VAR};
