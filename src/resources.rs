//! Resource directory: logical API areas and their routing identifiers.
//!
//! The service routes each request through a resource area identified by a
//! stable GUID. The mapping is owned by the SDK, not by caller input, so an
//! unknown area is unrepresentable: areas are enum variants and the GUID
//! table is a compile-time constant.

/// A logical grouping of service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Projects, teams and processes.
    Core,
    /// Pipelines: builds, definitions, controllers.
    Build,
    /// Repositories, pull requests, refs.
    Git,
    /// Team settings, iterations, boards.
    Work,
    /// Work items and queries.
    WorkItemTracking,
    /// Service hook subscriptions.
    ServiceHooks,
    /// User and group entitlements.
    MemberEntitlement,
}

impl Resource {
    /// The path segment under `_apis` for this area.
    pub fn area(&self) -> &'static str {
        match self {
            Resource::Core => "core",
            Resource::Build => "build",
            Resource::Git => "git",
            Resource::Work => "work",
            Resource::WorkItemTracking => "wit",
            Resource::ServiceHooks => "hooks",
            Resource::MemberEntitlement => "memberentitlementmanagement",
        }
    }

    /// The stable resource identifier the service uses to route requests
    /// for this area.
    pub fn id(&self) -> &'static str {
        match self {
            Resource::Core => "79134c72-4a58-4b42-976c-04e7115f32bf",
            Resource::Build => "5d6898bb-45ec-463f-95f9-54d49c71752e",
            Resource::Git => "4e080c62-fa21-4fbc-8fef-2a10a2b38049",
            Resource::Work => "1d4f49f9-02b9-4e26-b826-2cdb6195f2a9",
            Resource::WorkItemTracking => "5264459e-e5e0-4bd8-b118-0985e68a4ec5",
            Resource::ServiceHooks => "2aefcbb6-d70d-4c29-96ff-ea4e00e0b15e",
            Resource::MemberEntitlement => "68ddce18-2501-45f1-a17b-7931a9922690",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_names() {
        assert_eq!(Resource::Build.area(), "build");
        assert_eq!(Resource::ServiceHooks.area(), "hooks");
        assert_eq!(Resource::Work.area(), "work");
    }

    #[test]
    fn test_resource_ids_are_stable_guids() {
        assert_eq!(Resource::Work.id(), "1d4f49f9-02b9-4e26-b826-2cdb6195f2a9");
        for resource in [
            Resource::Core,
            Resource::Build,
            Resource::Git,
            Resource::Work,
            Resource::WorkItemTracking,
            Resource::ServiceHooks,
            Resource::MemberEntitlement,
        ] {
            assert_eq!(resource.id().len(), 36);
        }
    }
}
