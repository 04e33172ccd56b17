//! Per-endpoint API version strings.
//!
//! The service assigns version numbers independently per endpoint revision;
//! different response shapes of the same logical endpoint carry different
//! versions. They are a lookup table, passed verbatim per call site, never
//! derived.

/// Builds: get, list, queue, delete.
pub const BUILD: &str = "6.1-preview.6";
/// Changes associated with a build or between builds.
pub const BUILD_CHANGES: &str = "6.1-preview.2";
/// Work items associated with a build or between builds.
pub const BUILD_WORK_ITEMS: &str = "6.1-preview.1";
/// Build log listing and individual log retrieval.
pub const BUILD_LOGS: &str = "6.1-preview.2";
/// Build controllers.
pub const BUILD_CONTROLLERS: &str = "6.1-preview.2";
/// Build definitions: create, get, list, delete, restore.
pub const BUILD_DEFINITIONS: &str = "6.1-preview.7";
/// Build definition revision history.
pub const BUILD_DEFINITION_REVISIONS: &str = "6.1-preview.3";

/// Projects and teams.
pub const CORE: &str = "6.1-preview.4";

/// Repositories, pull requests, refs, labels, reviewers.
pub const GIT: &str = "6.1-preview.1";

/// Team settings and iterations.
pub const WORK: &str = "6.1-preview.1";

/// Service hook subscriptions.
pub const SERVICE_HOOKS: &str = "6.1-preview.1";

/// User and group entitlements.
pub const MEMBER_ENTITLEMENT: &str = "6.1-preview.3";
