//! Small building blocks shared by the page sections.

mod heading;
pub mod icons;
mod lightbox;

pub use heading::SectionHeading;
pub use icons::Icon;
pub use lightbox::Lightbox;
