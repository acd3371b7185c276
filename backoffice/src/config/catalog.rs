use std::collections::HashSet;

use backoffice_ui_menu::{MenuNode, find_node, first_duplicate_id};
use serde::Deserialize;

use super::errors::CatalogError;
use crate::services::auth::{DemoAccount, Role};
use crate::widgets::modules::model::Module;
use crate::widgets::users::model::UserRecord;

/// Static data the dashboard is seeded with.
///
/// Every field falls back to the built-in value when missing from the
/// catalog file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct Catalog {
    pub(crate) menu: Vec<MenuNode>,
    pub(crate) modules: Vec<Module>,
    pub(crate) default_section: String,
    pub(crate) accounts: Vec<DemoAccount>,
    pub(crate) users: Vec<UserRecord>,
}

impl Catalog {
    /// Check the uniqueness and reference invariants once, at construction
    /// time. Sections opened by modules or at login must be leaf items.
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if let Some(id) = first_duplicate_id(&self.menu) {
            return Err(CatalogError::DuplicateId {
                scope: "menu",
                id: id.to_owned(),
            });
        }

        let mut seen = HashSet::new();
        for module in &self.modules {
            if !seen.insert(module.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    scope: "module",
                    id: module.id.clone(),
                });
            }
        }

        let sections = self
            .modules
            .iter()
            .map(|module| module.section.as_str())
            .chain(std::iter::once(self.default_section.as_str()));
        for section in sections {
            match find_node(&self.menu, section) {
                None => {
                    return Err(CatalogError::UnknownSection {
                        id: section.to_owned(),
                    });
                },
                Some(node) if node.has_children() || node.is_divider() => {
                    return Err(CatalogError::NotSelectable {
                        id: section.to_owned(),
                    });
                },
                Some(_) => {},
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            menu: default_menu(),
            modules: default_modules(),
            default_section: String::from("dashboard"),
            accounts: default_accounts(),
            users: default_users(),
        }
    }
}

fn default_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::item("dashboard", "Dashboard").with_icon("dashboard"),
        MenuNode::group(
            "sales",
            "Sales",
            vec![
                MenuNode::item("orders", "Orders"),
                MenuNode::item("invoices", "Invoices"),
                MenuNode::group(
                    "billing",
                    "Billing",
                    vec![
                        MenuNode::item("payments", "Payments"),
                        MenuNode::item("refunds", "Refunds"),
                    ],
                ),
            ],
        )
        .with_icon("cart"),
        MenuNode::item("inventory", "Inventory").with_icon("box"),
        MenuNode::group(
            "people",
            "People",
            vec![
                MenuNode::item("users", "Users"),
                MenuNode::item("roles", "Roles"),
            ],
        )
        .with_icon("users"),
        MenuNode::divider("divider-reports"),
        MenuNode::item("reports", "Reports").with_icon("chart"),
        MenuNode::item("settings", "Settings").with_icon("settings"),
    ]
}

fn default_modules() -> Vec<Module> {
    vec![
        Module::new("orders", "Orders", "#4FA6ED", "cart", "orders"),
        Module::new("users", "Users", "#98C379", "users", "users"),
        Module::new("reports", "Reports", "#E5C07B", "chart", "reports"),
        Module::new("payments", "Payments", "#C678DD", "card", "payments"),
        Module::new("invoices", "Invoices", "#56B6C2", "file", "invoices"),
        Module::new("inventory", "Inventory", "#E06C75", "box", "inventory"),
    ]
}

fn default_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount::new(
            "Ada Admin",
            "admin@backoffice.local",
            "admin",
            Role::Admin,
        ),
        DemoAccount::new(
            "Max Manager",
            "manager@backoffice.local",
            "manager",
            Role::Manager,
        ),
    ]
}

fn default_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(
            "Ada Admin",
            "admin@backoffice.local",
            Role::Admin,
            true,
        ),
        UserRecord::new(
            "Max Manager",
            "manager@backoffice.local",
            Role::Manager,
            true,
        ),
        UserRecord::new(
            "Vera Viewer",
            "vera@backoffice.local",
            Role::Viewer,
            true,
        ),
        UserRecord::new(
            "Otto Offboarded",
            "otto@backoffice.local",
            Role::Viewer,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use backoffice_ui_menu::MenuNode;

    use super::Catalog;
    use crate::config::CatalogError;
    use crate::widgets::modules::model::Module;

    #[test]
    fn given_builtin_catalog_when_validated_then_it_is_consistent() {
        Catalog::default()
            .validate()
            .expect("built-in catalog should be valid");
    }

    #[test]
    fn given_duplicate_menu_id_when_validated_then_error_names_it() {
        let mut catalog = Catalog::default();
        catalog.menu.push(MenuNode::item("orders", "Orders again"));

        match catalog.validate() {
            Err(CatalogError::DuplicateId { scope, id }) => {
                assert_eq!(scope, "menu");
                assert_eq!(id, "orders");
            },
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn given_duplicate_module_id_when_validated_then_error_names_it() {
        let mut catalog = Catalog::default();
        catalog.modules.push(Module::new(
            "users", "Users", "#FFFFFF", "users", "users",
        ));

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { scope: "module", .. })
        ));
    }

    #[test]
    fn given_unknown_default_section_when_validated_then_error_is_returned() {
        let catalog = Catalog {
            default_section: String::from("nowhere"),
            ..Catalog::default()
        };

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownSection { .. })
        ));
    }

    #[test]
    fn given_module_pointing_outside_menu_when_validated_then_error_names_it() {
        let mut catalog = Catalog::default();
        catalog.modules.push(Module::new(
            "audit", "Audit", "#FFFFFF", "file", "audit-log",
        ));

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownSection { id }) if id == "audit-log"
        ));
    }

    #[test]
    fn given_module_targeting_group_when_validated_then_error_is_returned() {
        let mut catalog = Catalog::default();
        catalog.modules.push(Module::new(
            "sales-hub", "Sales", "#FFFFFF", "cart", "sales",
        ));

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NotSelectable { id }) if id == "sales"
        ));
    }

    #[test]
    fn given_default_section_on_divider_when_validated_then_error_is_returned()
    {
        let catalog = Catalog {
            default_section: String::from("divider-reports"),
            ..Catalog::default()
        };

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NotSelectable { .. })
        ));
    }
}
