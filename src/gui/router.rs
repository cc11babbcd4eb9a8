// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::data::PAGE,
    &pages::map_points::PAGE,
    &pages::map_clusters::PAGE,
    &pages::histogram::PAGE,
    &pages::predict::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
