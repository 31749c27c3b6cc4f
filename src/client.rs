//! Client side of the portfolio: a typed API client plus the UI-agnostic
//! state the site's sections are driven by (lists, forms, icons, theme).

pub mod admin_panel;
pub mod api;
pub mod contact_form;
pub mod icons;
pub mod listing;
pub mod theme;

pub use api::{ClientError, PortfolioApi, PortfolioClient};
