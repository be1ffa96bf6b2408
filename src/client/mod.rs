mod form;
mod outcome;
mod transport;

pub use form::{FormState, ReviewBackend, ReviewForm, SubmitBlocked};
pub use outcome::{
    Outcome, Reply, ReplyBody, Tone, NETWORK_FALLBACK, SERVER_FALLBACK, SUCCESS_FALLBACK,
};
pub use transport::ReviewClient;
