//! Navigation menu model
//!
//! The statically defined menu tree and the "where is the user right now"
//! resolution used to mark the current entry. `Menu` identities are a closed
//! enum compared by tag; an [`ActiveMenu`] pairs an identity with optional
//! disambiguating data for identities that several navigable contexts share
//! (account history per account type, content pages, custom operations).
//!
//! Everything here is plain data and pure comparison. Rendering the tree is
//! the hosting UI layer's business.

pub mod active;
pub mod model;

pub use active::{AccountType, ActiveMenu, ActiveMenuData, Operation};
pub use model::{
    find_active, Menu, MenuEntry, MenuType, RootMenu, RootMenuEntry, SideMenuEntries,
};
