//! Elements and zodiac signs shared by cards and querent profiles.

mod element;
mod zodiac;

pub use element::Element;
pub use zodiac::ZodiacSign;
