pub mod auth_form;
pub mod connect_button;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod network_select;
pub mod partners;
pub mod social_links;
pub mod testimonials;
