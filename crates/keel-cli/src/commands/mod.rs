mod dockerfile;
mod metadata;

pub use dockerfile::dockerfile;
pub use metadata::metadata;
