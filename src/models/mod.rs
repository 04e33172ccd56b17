//! Azure DevOps API model types.

mod build;
mod common;
mod core;
mod entitlements;
mod git;
mod service_hooks;
mod work;

pub use build::*;
pub use common::*;
pub use core::*;
pub use entitlements::*;
pub use git::*;
pub use service_hooks::*;
pub use work::*;
