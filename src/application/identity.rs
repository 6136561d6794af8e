//! Caller identity
//!
//! The identity is only ever stamped onto new orders as `createdBy`; nothing in
//! the ledger inspects it or enforces any policy with it.

use crate::domain::CreatorId;

/// Supplies the identity of whoever is using the ledger
pub trait IdentityProvider: Send + Sync {
    fn current_identity(&self) -> Option<CreatorId>;
}

/// An anonymous identity minted once per process
#[derive(Debug, Clone)]
pub struct AnonymousIdentity {
    id: CreatorId,
}

impl AnonymousIdentity {
    pub fn new() -> Self {
        Self {
            id: CreatorId::anonymous(),
        }
    }
}

impl Default for AnonymousIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for AnonymousIdentity {
    fn current_identity(&self) -> Option<CreatorId> {
        Some(self.id.clone())
    }
}

/// A fixed identity, or none at all
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<CreatorId>);

impl IdentityProvider for StaticIdentity {
    fn current_identity(&self) -> Option<CreatorId> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_identity_is_stable_for_its_lifetime() {
        let identity = AnonymousIdentity::new();
        assert_eq!(identity.current_identity(), identity.current_identity());
        assert_ne!(
            identity.current_identity(),
            AnonymousIdentity::new().current_identity()
        );
    }

    #[test]
    fn static_identity_may_be_absent() {
        assert!(StaticIdentity::default().current_identity().is_none());
    }
}
