pub mod newsletter;
pub mod utils;
pub mod view;

pub use newsletter::{NewsletterForm, SubmitOutcome};
pub use view::Footer;
