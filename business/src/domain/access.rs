//! Authorization policy.
//!
//! Every decision is a pure function of the caller and the resource owner,
//! so use cases ask the policy instead of comparing roles inline.

use crate::domain::shared::value_objects::TenantId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "customer" => Ok(Role::Customer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Authenticated principal performing a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub user_id: String,
    pub role: Role,
    pub tenant: Option<TenantId>,
}

impl Caller {
    pub fn new(user_id: impl Into<String>, role: Role, tenant: Option<TenantId>) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            tenant,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        self == AccessDecision::Allow
    }
}

impl From<bool> for AccessDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny
        }
    }
}

/// Only admins maintain the category list.
pub fn can_manage_categories(caller: &Caller) -> AccessDecision {
    caller.is_admin().into()
}

/// Admins and managers may create or edit products.
pub fn can_manage_products(caller: &Caller) -> AccessDecision {
    matches!(caller.role, Role::Admin | Role::Manager).into()
}

/// Admins may write any product; everyone else only products owned by
/// their own tenant.
pub fn can_write_product(caller: &Caller, owner: &TenantId) -> AccessDecision {
    if caller.is_admin() {
        return AccessDecision::Allow;
    }

    (caller.tenant.as_ref() == Some(owner)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Caller {
        Caller::new("u-admin", Role::Admin, None)
    }

    fn manager_of(tenant: &str) -> Caller {
        Caller::new("u-manager", Role::Manager, Some(TenantId::new(tenant)))
    }

    #[test]
    fn should_parse_known_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn should_allow_admin_to_write_any_tenant_product() {
        let decision = can_write_product(&admin(), &TenantId::new("tenant-1"));
        assert_eq!(decision, AccessDecision::Allow);
    }

    #[test]
    fn should_allow_manager_to_write_own_tenant_product() {
        let decision = can_write_product(&manager_of("tenant-1"), &TenantId::new("tenant-1"));
        assert!(decision.is_allowed());
    }

    #[test]
    fn should_deny_manager_writing_other_tenant_product() {
        let decision = can_write_product(&manager_of("tenant-1"), &TenantId::new("tenant-2"));
        assert_eq!(decision, AccessDecision::Deny);
    }

    #[test]
    fn should_deny_non_admin_without_tenant() {
        let caller = Caller::new("u", Role::Manager, None);
        let decision = can_write_product(&caller, &TenantId::new("tenant-1"));
        assert_eq!(decision, AccessDecision::Deny);
    }

    #[test]
    fn should_restrict_product_management_to_staff_roles() {
        let customer = Caller::new("u", Role::Customer, Some(TenantId::new("t")));
        assert!(can_manage_products(&admin()).is_allowed());
        assert!(can_manage_products(&manager_of("t")).is_allowed());
        assert!(!can_manage_products(&customer).is_allowed());
    }

    #[test]
    fn should_restrict_category_management_to_admins() {
        assert!(can_manage_categories(&admin()).is_allowed());
        assert!(!can_manage_categories(&manager_of("t")).is_allowed());
    }
}
