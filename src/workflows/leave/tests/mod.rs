mod common;

mod registry;
mod requests;
