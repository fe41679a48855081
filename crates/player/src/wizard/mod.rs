//! Character creation wizard
//!
//! A linear seven-step session owning the in-progress draft. The session is
//! an ordinary value: build it with [`WizardSession::new`] or
//! [`WizardSession::for_edit`], mutate it through `&mut self`, and finish it
//! with [`WizardSession::commit`] or [`WizardSession::discard`].

mod attribute_step;
mod draft;
mod session;
mod step;

pub use attribute_step::{AttributeMethod, AttributePreview, AttributeStep};
pub use draft::{AttributePatch, CharacterDraft, DescriptionPatch, DraftPatch};
pub use session::{CommitFailure, SummaryPreview, WizardMode, WizardSession};
pub use step::WizardStep;
