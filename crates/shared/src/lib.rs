pub mod marker;
pub mod view;
