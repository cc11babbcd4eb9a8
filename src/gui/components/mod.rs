// src/gui/components/mod.rs
pub mod category_panel;
pub mod tabs;
pub mod action_bar;
pub mod data_table;
pub mod map_canvas;
