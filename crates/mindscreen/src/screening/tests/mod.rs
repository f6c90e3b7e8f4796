mod common;
mod scaling;
mod session;
