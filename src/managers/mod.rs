// State managers: the bookmark controller and the pure views it derives.

pub mod bookmark_controller;
pub mod bookmark_view;
