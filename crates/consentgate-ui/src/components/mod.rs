//! Reusable UI components for the terms screen

mod agreement_checkbox;
mod button;
mod document_card;
mod gate_status;

pub use agreement_checkbox::*;
pub use button::*;
pub use document_card::*;
pub use gate_status::*;
