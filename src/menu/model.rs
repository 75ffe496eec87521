//! Static menu tree model

use super::active::ActiveMenu;

/// The types of menus in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuType {
    /// The sidenav shown on small devices
    Sidenav,
    /// The horizontal bar shown on medium+ devices when using a single top bar
    Top,
    /// The horizontal bar shown on medium+ devices when splitting the top and the menu bar
    Bar,
    /// The second-level side menu shown on medium+ devices
    Side,
}

/// Top-level (root) menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootMenu {
    Dashboard,
    Banking,
    Operators,
    Brokering,
    Marketplace,
    Home,
    PublicDirectory,
    PublicMarketplace,
    Content,
    Personal,
    Registration,
    Login,
    Logout,
}

impl RootMenu {
    /// Every root menu, in display order
    pub fn values() -> &'static [RootMenu] {
        &[
            RootMenu::Dashboard,
            RootMenu::Banking,
            RootMenu::Operators,
            RootMenu::Brokering,
            RootMenu::Marketplace,
            RootMenu::Home,
            RootMenu::PublicDirectory,
            RootMenu::PublicMarketplace,
            RootMenu::Content,
            RootMenu::Personal,
            RootMenu::Registration,
            RootMenu::Login,
            RootMenu::Logout,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RootMenu::Dashboard => "dashboard",
            RootMenu::Banking => "banking",
            RootMenu::Operators => "operators",
            RootMenu::Brokering => "brokering",
            RootMenu::Marketplace => "marketplace",
            RootMenu::Home => "home",
            RootMenu::PublicDirectory => "publicDirectory",
            RootMenu::PublicMarketplace => "publicMarketplace",
            RootMenu::Content => "content",
            RootMenu::Personal => "personal",
            RootMenu::Registration => "registration",
            RootMenu::Login => "login",
            RootMenu::Logout => "logout",
        }
    }
}

impl std::fmt::Display for RootMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A defined menu identity
///
/// Identities are compared by tag, never by reference: two `Menu` values are
/// the same entry iff they are the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    // Standalone
    Home,
    Dashboard,
    PublicDirectory,
    PublicMarketplace,
    PublicRegistration,
    Login,
    Logout,

    // Banking
    AccountHistory,
    AdminTransfersOverview,
    PaymentToUser,
    PaymentToSelf,
    PaymentToSystem,
    Pos,
    ScheduledPayments,
    AuthorizedPayments,

    // Users / marketplace
    SearchUsers,
    SearchAds,
    AdminRegistration,

    // Operators
    MyOperators,
    RegisterOperator,
    OperatorGroups,

    // Brokering
    MyBrokeredUsers,
    BrokerRegistration,
    BrokerTransfersOverview,

    // Personal
    MyProfile,
    EditMyProfile,
    Contacts,
    Passwords,
    Notifications,
    Settings,

    // Custom operations (one per root menu in owner, also one per operation container)
    RunOperationBanking,
    RunOperationMarketplace,
    RunOperationPersonal,
    RunUserOperation,
    RunMarketplaceOperation,
    RunTransferOperation,
    RunActionOperation,

    // Content (one per root menu)
    ContentPageBanking,
    ContentPageMarketplace,
    ContentPagePersonal,
    ContentPageContent,
}

impl Menu {
    /// The menus that represent content pages in distinct root menus
    pub fn content_pages() -> &'static [Menu] {
        &[
            Menu::ContentPageBanking,
            Menu::ContentPageMarketplace,
            Menu::ContentPagePersonal,
            Menu::ContentPageContent,
        ]
    }

    /// The root menu this entry lives under
    pub fn root(&self) -> RootMenu {
        self.parts().0
    }

    /// The symbolic name of this entry
    pub fn name(&self) -> &'static str {
        self.parts().1
    }

    fn parts(&self) -> (RootMenu, &'static str) {
        match self {
            Menu::Home => (RootMenu::Home, "HOME"),
            Menu::Dashboard => (RootMenu::Dashboard, "DASHBOARD"),
            Menu::PublicDirectory => (RootMenu::PublicDirectory, "PUBLIC_DIRECTORY"),
            Menu::PublicMarketplace => (RootMenu::PublicMarketplace, "PUBLIC_MARKETPLACE"),
            Menu::PublicRegistration => (RootMenu::Registration, "PUBLIC_REGISTRATION"),
            Menu::Login => (RootMenu::Login, "LOGIN"),
            Menu::Logout => (RootMenu::Logout, "LOGOUT"),

            Menu::AccountHistory => (RootMenu::Banking, "ACCOUNT_HISTORY"),
            Menu::AdminTransfersOverview => (RootMenu::Banking, "ADMIN_TRANSFERS_OVERVIEW"),
            Menu::PaymentToUser => (RootMenu::Banking, "PAYMENT_TO_USER"),
            Menu::PaymentToSelf => (RootMenu::Banking, "PAYMENT_TO_SELF"),
            Menu::PaymentToSystem => (RootMenu::Banking, "PAYMENT_TO_SYSTEM"),
            Menu::Pos => (RootMenu::Banking, "POS"),
            Menu::ScheduledPayments => (RootMenu::Banking, "SCHEDULED_PAYMENTS"),
            Menu::AuthorizedPayments => (RootMenu::Banking, "AUTHORIZED_PAYMENTS"),

            Menu::SearchUsers => (RootMenu::Marketplace, "SEARCH_USERS"),
            Menu::SearchAds => (RootMenu::Marketplace, "SEARCH_ADS"),
            Menu::AdminRegistration => (RootMenu::Marketplace, "ADMIN_REGISTRATION"),

            Menu::MyOperators => (RootMenu::Operators, "MY_OPERATORS"),
            Menu::RegisterOperator => (RootMenu::Operators, "REGISTER_OPERATOR"),
            Menu::OperatorGroups => (RootMenu::Operators, "OPERATOR_GROUPS"),

            Menu::MyBrokeredUsers => (RootMenu::Brokering, "MY_BROKERED_USERS"),
            Menu::BrokerRegistration => (RootMenu::Brokering, "BROKER_REGISTRATION"),
            Menu::BrokerTransfersOverview => (RootMenu::Brokering, "BROKER_TRANSFERS_OVERVIEW"),

            Menu::MyProfile => (RootMenu::Personal, "MY_PROFILE"),
            Menu::EditMyProfile => (RootMenu::Personal, "EDIT_MY_PROFILE"),
            Menu::Contacts => (RootMenu::Personal, "CONTACTS"),
            Menu::Passwords => (RootMenu::Personal, "PASSWORDS"),
            Menu::Notifications => (RootMenu::Personal, "NOTIFICATIONS"),
            Menu::Settings => (RootMenu::Personal, "SETTINGS"),

            Menu::RunOperationBanking => (RootMenu::Banking, "RUN_OPERATION_BANKING"),
            Menu::RunOperationMarketplace => (RootMenu::Marketplace, "RUN_OPERATION_MARKETPLACE"),
            Menu::RunOperationPersonal => (RootMenu::Personal, "RUN_OPERATION_PERSONAL"),
            Menu::RunUserOperation => (RootMenu::Marketplace, "RUN_USER_OPERATION"),
            Menu::RunMarketplaceOperation => (RootMenu::Marketplace, "RUN_MARKETPLACE_OPERATION"),
            Menu::RunTransferOperation => (RootMenu::Banking, "RUN_TRANSFER_OPERATION"),
            Menu::RunActionOperation => (RootMenu::Banking, "RUN_ACTION_OPERATION"),

            Menu::ContentPageBanking => (RootMenu::Banking, "CONTENT_PAGE_BANKING"),
            Menu::ContentPageMarketplace => (RootMenu::Marketplace, "CONTENT_PAGE_MARKETPLACE"),
            Menu::ContentPagePersonal => (RootMenu::Personal, "CONTENT_PAGE_PERSONAL"),
            Menu::ContentPageContent => (RootMenu::Content, "CONTENT_PAGE_CONTENT"),
        }
    }
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.root(), self.name())
    }
}

/// A resolved navigable menu entry
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// The active-menu selector this entry represents
    pub active_menu: ActiveMenu,
    /// Target URL
    pub url: String,
    /// Icon name
    pub icon: String,
    /// Display label
    pub label: String,
    /// Menu types this entry is shown in (`None` = all)
    pub show_in: Option<Vec<MenuType>>,
}

impl MenuEntry {
    /// Create an entry; a bare `Menu` becomes a data-less selector
    pub fn new(
        menu: impl Into<ActiveMenu>,
        url: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            active_menu: menu.into(),
            url: url.into(),
            icon: icon.into(),
            label: label.into(),
            show_in: None,
        }
    }

    /// Restrict the entry to the given menu types
    pub fn show_in(mut self, types: Vec<MenuType>) -> Self {
        self.show_in = Some(types);
        self
    }

    /// The menu identity of this entry
    pub fn menu(&self) -> Menu {
        self.active_menu.menu
    }

    /// Whether the entry is shown in the given menu type
    pub fn shown_in(&self, menu_type: MenuType) -> bool {
        self.show_in
            .as_ref()
            .map_or(true, |types| types.contains(&menu_type))
    }
}

/// A resolved root menu entry with its children
#[derive(Debug, Clone)]
pub struct RootMenuEntry {
    pub root_menu: RootMenu,
    pub icon: String,
    pub label: String,
    /// Title shown when the menu is open; defaults to the label
    pub title: String,
    pub show_in: Option<Vec<MenuType>>,
    /// Whether the entry renders as a dropdown
    pub dropdown: bool,
    /// The entries in this menu
    pub entries: Vec<MenuEntry>,
}

impl RootMenuEntry {
    pub fn new(
        root_menu: RootMenu,
        icon: impl Into<String>,
        label: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        let label = label.into();
        let title = title.unwrap_or_else(|| label.clone());
        Self {
            root_menu,
            icon: icon.into(),
            label,
            title,
            show_in: None,
            dropdown: false,
            entries: Vec::new(),
        }
    }
}

/// The entries to show in the side menu
#[derive(Debug, Clone)]
pub struct SideMenuEntries {
    pub title: String,
    pub icon: String,
    pub entries: Vec<MenuEntry>,
}

/// Find the entry the given selector marks as current
pub fn find_active<'a>(entries: &'a [MenuEntry], active: &ActiveMenu) -> Option<&'a MenuEntry> {
    entries
        .iter()
        .find(|entry| active.matches(Some(&entry.active_menu)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::active::{AccountType, ActiveMenuData};

    #[test]
    fn test_menu_display() {
        assert_eq!(Menu::AccountHistory.to_string(), "banking.ACCOUNT_HISTORY");
        assert_eq!(
            Menu::PublicRegistration.to_string(),
            "registration.PUBLIC_REGISTRATION"
        );
    }

    #[test]
    fn test_root_menu_values_complete() {
        assert_eq!(RootMenu::values().len(), 13);
    }

    #[test]
    fn test_content_pages_span_their_roots() {
        let roots: Vec<RootMenu> = Menu::content_pages().iter().map(|m| m.root()).collect();
        assert_eq!(
            roots,
            [
                RootMenu::Banking,
                RootMenu::Marketplace,
                RootMenu::Personal,
                RootMenu::Content
            ]
        );
    }

    #[test]
    fn test_entry_from_bare_menu_has_no_data() {
        let entry = MenuEntry::new(Menu::Dashboard, "/dashboard", "home", "Dashboard");
        assert_eq!(entry.menu(), Menu::Dashboard);
        assert!(entry.active_menu.data.is_none());
    }

    #[test]
    fn test_entry_show_in() {
        let entry = MenuEntry::new(Menu::Login, "/login", "login", "Login")
            .show_in(vec![MenuType::Sidenav, MenuType::Top]);

        assert!(entry.shown_in(MenuType::Sidenav));
        assert!(!entry.shown_in(MenuType::Side));

        let unrestricted = MenuEntry::new(Menu::Login, "/login", "login", "Login");
        assert!(unrestricted.shown_in(MenuType::Side));
    }

    #[test]
    fn test_root_entry_title_falls_back_to_label() {
        let entry = RootMenuEntry::new(RootMenu::Banking, "account", "Banking", None);
        assert_eq!(entry.title, "Banking");

        let titled = RootMenuEntry::new(
            RootMenu::Banking,
            "account",
            "Banking",
            Some("Account services".to_string()),
        );
        assert_eq!(titled.title, "Account services");
    }

    #[test]
    fn test_find_active_resolves_disambiguated_entry() {
        let checking = ActiveMenu::with_data(
            Menu::AccountHistory,
            ActiveMenuData::account_type(AccountType::new("checking", "Checking account")),
        );
        let savings = ActiveMenu::with_data(
            Menu::AccountHistory,
            ActiveMenuData::account_type(AccountType::new("savings", "Savings account")),
        );

        let entries = vec![
            MenuEntry::new(checking.clone(), "/banking/checking", "account", "Checking"),
            MenuEntry::new(savings.clone(), "/banking/savings", "account", "Savings"),
        ];

        let found = find_active(&entries, &savings).unwrap();
        assert_eq!(found.url, "/banking/savings");

        let elsewhere = ActiveMenu::new(Menu::Dashboard);
        assert!(find_active(&entries, &elsewhere).is_none());
    }
}
