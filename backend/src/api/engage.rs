//! Engagement form intake: get-involved interest and newsletter signup.
//!
//! There is no mail-provider integration; submissions are validated and
//! logged for the team to pick up.

use common::engage::InterestSubmission;

pub async fn record_interest(submission: InterestSubmission) -> anyhow::Result<()> {
    anyhow::ensure!(!submission.name.trim().is_empty(), "Please enter your name");
    anyhow::ensure!(
        submission.email.contains('@'),
        "Please enter a valid email address"
    );

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        interest = %submission.interest,
        "get-involved submission"
    );
    Ok(())
}

pub async fn subscribe_newsletter(email: String) -> anyhow::Result<()> {
    anyhow::ensure!(email.contains('@'), "Please enter a valid email address");

    tracing::info!(%email, "newsletter signup");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_name() {
        let submission = InterestSubmission {
            email: "someone@example.org".to_string(),
            ..Default::default()
        };
        assert!(record_interest(submission).await.is_err());
    }

    #[tokio::test]
    async fn rejects_bad_email() {
        assert!(subscribe_newsletter("not-an-email".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn accepts_complete_submission() {
        let submission = InterestSubmission {
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            interest: "research".to_string(),
            message: "Happy to help".to_string(),
        };
        assert!(record_interest(submission).await.is_ok());
    }
}
