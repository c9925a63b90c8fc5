pub mod consts;
pub mod error;
pub mod feature;
pub mod geo;
pub mod io;
pub mod overlay;
pub mod session;
pub mod viewport;
