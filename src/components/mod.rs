mod app;
mod fields;
mod lead_form;
mod nav_bar;
mod primitives;

pub use app::App;
pub use lead_form::LeadFormPanel;
pub use nav_bar::NavBar;
pub use primitives::{
    AnchorLink, Badge, ButtonLink, ButtonVariant, Card, CheckItem, Container, CrossItem, Divider,
    SectionTitle, Stat,
};
