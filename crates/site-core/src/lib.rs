pub mod camera;
pub mod catalog;
pub mod constants;
pub mod content;
pub mod motion;
pub mod route;
pub mod terrain;
pub mod theme;

pub use camera::*;
pub use catalog::*;
pub use constants::*;
pub use content::*;
pub use motion::*;
pub use route::*;
pub use terrain::*;
pub use theme::*;
