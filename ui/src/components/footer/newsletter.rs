/// Local state of the newsletter form. Nothing leaves the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    submitted: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// empty field, same as the browser's `required` check
    Rejected,
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.email.trim().is_empty() {
            return SubmitOutcome::Rejected;
        }
        self.submitted = true;
        SubmitOutcome::Accepted
    }

    /// Fired by the delayed reset once a submission has been shown.
    pub fn reset(&mut self) {
        self.email.clear();
        self.submitted = false;
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitted { "Subscribed!" } else { "Subscribe" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submission_flags_immediately() {
        let mut form = NewsletterForm::default();
        assert!(!form.is_submitted());

        form.set_email("ada@example.com".into());
        assert!(!form.is_submitted());

        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.is_submitted());
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.button_label(), "Subscribed!");
    }

    #[test]
    fn reset_clears_flag_and_field() {
        let mut form = NewsletterForm::default();
        form.set_email("ada@example.com".into());
        form.submit();

        form.reset();
        assert_eq!(form, NewsletterForm::default());
        assert_eq!(form.button_label(), "Subscribe");
    }

    #[test]
    fn empty_submission_changes_nothing() {
        for email in ["", "   ", "\t\n"] {
            let mut form = NewsletterForm::default();
            form.set_email(email.into());
            let before = form.clone();

            assert_eq!(form.submit(), SubmitOutcome::Rejected);
            assert_eq!(form, before);
        }
    }

    #[test]
    fn format_is_not_checked() {
        let mut form = NewsletterForm::default();
        form.set_email("not an address".into());
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
    }
}
