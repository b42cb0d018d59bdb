//! Page components for consentgate.

mod payment;
mod terms;

pub use payment::PaymentPage;
pub use terms::TermsPage;
