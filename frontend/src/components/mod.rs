pub mod app_description;
pub mod carousel_view;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod mobile_menu;
pub mod preregister_form;
pub mod reveal;
pub mod screenshots;
pub mod testimonials;
pub mod theme_toggle;
