//! Active menu resolution
//!
//! An [`ActiveMenu`] names where in the navigation tree the user currently
//! is: a menu identity plus optional disambiguating data for identities
//! shared by several navigable contexts. Selectors are built per navigation
//! decision and compared transiently while rendering; nothing here mutates
//! or persists.

use super::model::Menu;

/// Reference to an account type, compared by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountType {
    pub id: String,
    pub name: String,
}

impl AccountType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Reference to a custom operation, compared by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub id: String,
    pub name: String,
}

impl Operation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Additional identifier for a dynamic active menu
///
/// At most one field should be populated: the one matching the menu
/// identity's disambiguation axis. The resolver does not validate this;
/// callers construct the data for the axis their identity uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveMenuData {
    pub account_type: Option<AccountType>,
    pub operation: Option<Operation>,
    pub content_page: Option<String>,
}

impl ActiveMenuData {
    /// Data disambiguated by account type
    pub fn account_type(account_type: AccountType) -> Self {
        Self {
            account_type: Some(account_type),
            ..Default::default()
        }
    }

    /// Data disambiguated by custom operation
    pub fn operation(operation: Operation) -> Self {
        Self {
            operation: Some(operation),
            ..Default::default()
        }
    }

    /// Data disambiguated by content page name
    pub fn content_page(name: impl Into<String>) -> Self {
        Self {
            content_page: Some(name.into()),
            ..Default::default()
        }
    }

    /// Whether no disambiguation field is populated
    pub fn is_empty(&self) -> bool {
        self.account_type.is_none() && self.operation.is_none() && self.content_page.is_none()
    }
}

/// Information about the active menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMenu {
    /// The menu identity
    pub menu: Menu,
    /// Optional disambiguating data
    pub data: Option<ActiveMenuData>,
}

impl ActiveMenu {
    /// Selector for a menu identity with no disambiguating data
    pub fn new(menu: Menu) -> Self {
        Self { menu, data: None }
    }

    /// Selector for a menu identity disambiguated by `data`
    pub fn with_data(menu: Menu, data: ActiveMenuData) -> Self {
        Self {
            menu,
            data: Some(data),
        }
    }

    /// Whether this selector and `other` resolve to the same place
    ///
    /// Both sides must have the same menu identity; the data then matches
    /// when either both sides carry none, or both populate the same axis
    /// with equal values (account-type ids, operation ids, or content page
    /// names). The branches are OR'ed: sides disambiguated on different
    /// axes never match, even for the same identity. A `None` target never
    /// matches.
    pub fn matches(&self, other: Option<&ActiveMenu>) -> bool {
        let Some(other) = other else {
            return false;
        };

        if self.menu != other.menu {
            return false;
        }

        let a = self.data.as_ref();
        let b = other.data.as_ref();

        // An all-None data struct counts as no data
        let a_empty = a.map_or(true, ActiveMenuData::is_empty);
        let b_empty = b.map_or(true, ActiveMenuData::is_empty);
        if a_empty && b_empty {
            return true;
        }

        let account_match = matches!(
            (
                a.and_then(|d| d.account_type.as_ref()),
                b.and_then(|d| d.account_type.as_ref()),
            ),
            (Some(x), Some(y)) if x.id == y.id
        );
        let operation_match = matches!(
            (
                a.and_then(|d| d.operation.as_ref()),
                b.and_then(|d| d.operation.as_ref()),
            ),
            (Some(x), Some(y)) if x.id == y.id
        );
        let content_match = matches!(
            (
                a.and_then(|d| d.content_page.as_deref()),
                b.and_then(|d| d.content_page.as_deref()),
            ),
            (Some(x), Some(y)) if x == y
        );

        account_match || operation_match || content_match
    }
}

impl From<Menu> for ActiveMenu {
    fn from(menu: Menu) -> Self {
        ActiveMenu::new(menu)
    }
}
