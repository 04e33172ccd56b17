//! Per-area API facades.
//!
//! Each facade borrows the client, validates its identifier parameters
//! before anything is dispatched, and maps one method to one endpoint.
//! Facades carry no state of their own; they are created on the fly from
//! the client accessors.

mod build;
mod core;
mod entitlements;
mod git;
mod service_hooks;
mod work;

pub use build::BuildApi;
pub use core::CoreApi;
pub use entitlements::MemberEntitlementApi;
pub use git::GitApi;
pub use service_hooks::ServiceHooksApi;
pub use work::WorkApi;

use crate::error::{AzDevError, Result};

/// Reject empty identifier parameters before a malformed URL can reach the
/// network.
pub(crate) fn require_arg(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AzDevError::InvalidArgument {
            name,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_arg_rejects_empty_and_blank() {
        assert!(require_arg("team", "").is_err());
        assert!(require_arg("team", "   ").is_err());
        assert!(require_arg("team", "Core Team").is_ok());
    }
}
