#[path = "helpers/mod.rs"]
mod helpers;

#[path = "project/mod.rs"]
mod project;

#[path = "render/mod.rs"]
mod render;
