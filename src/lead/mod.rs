mod dispatch;
mod form;

pub use dispatch::{FetchSink, LeadSink, SubmitError, LEAD_ENDPOINT, SUBMIT_FAILED_MESSAGE};
pub use form::{
    BrowserContext, ClinicSize, Confirmation, ContactRole, HardCase, LeadForm, LeadPayload,
};
