// Page sections: the persistent chrome plus the home page panels.

mod about;
mod capabilities;
mod contact;
mod equipment;
mod footer;
mod gallery;
mod hero;
mod layout;
mod nav;
mod top_bar;

pub use about::About;
pub use capabilities::Capabilities;
pub use contact::{ContactSection, FormStatusMessage};
pub use equipment::Equipment;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use layout::Layout;
pub use nav::Nav;
pub use top_bar::TopBar;
