//! Client API calls for engagement forms.

use common::engage::InterestSubmission;
use dioxus::prelude::*;


#[server]
pub async fn record_interest(submission: InterestSubmission) -> Result<(), ServerFnError> {
    let x = backend::api::engage::record_interest(submission).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn subscribe_newsletter(email: String) -> Result<(), ServerFnError> {
    let x = backend::api::engage::subscribe_newsletter(email).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
