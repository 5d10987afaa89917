mod common;

mod routing;
mod scoring;
