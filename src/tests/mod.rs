mod common;
mod resources;
