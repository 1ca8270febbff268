//! Login/signup form controller.
//!
//! Field edits are never validated on the fly; validation runs on submit
//! only, in the order the page presents its messages. Both field sets stay
//! alive while the visitor toggles between modes, so in-progress input is
//! preserved. The submission targets (user registration, session issuance)
//! are external collaborators; this controller stops at producing the
//! validated payload.

use serde::Serialize;

/// Shown under the signup form once a registration has been accepted.
pub const SIGNUP_SUCCESS_NOTICE: &str = "Votre inscription a bien été enregistrée.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupFields {
    fn all_filled(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }
}

/// Inline form errors, rendered verbatim under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Tous les champs sont obligatoires.")]
    MissingFields,
    #[error("Les mots de passe ne correspondent pas.")]
    PasswordMismatch,
}

/// Payload handed to the session-establishment collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload handed to the registration collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Login(LoginRequest),
    Signup(SignupRequest),
}

/// State of the dual-mode authentication form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    login: LoginFields,
    signup: SignupFields,
    error: Option<FormError>,
    notice: Option<&'static str>,
}

impl AuthForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub const fn login(&self) -> &LoginFields {
        &self.login
    }

    #[must_use]
    pub const fn signup(&self) -> &SignupFields {
        &self.signup
    }

    #[must_use]
    pub const fn error(&self) -> Option<FormError> {
        self.error
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Switch the active form. Keeps both field sets so toggling back and
    /// forth preserves in-progress input; a message from the other mode is
    /// meaningless here, so error and notice are dropped.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error = None;
        self.notice = None;
    }

    pub fn set_login_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.login.email = value,
            LoginField::Password => self.login.password = value,
        }
    }

    pub fn set_signup_field(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::FirstName => self.signup.first_name = value,
            SignupField::LastName => self.signup.last_name = value,
            SignupField::Email => self.signup.email = value,
            SignupField::Password => self.signup.password = value,
            SignupField::ConfirmPassword => self.signup.confirm_password = value,
        }
    }

    /// Validate the active form and produce the payload for the external
    /// collaborator.
    ///
    /// On validation failure the error is held on the form, the fields are
    /// left untouched and `None` is returned. On success the error is
    /// cleared; a signup additionally resets its fields and records the
    /// acknowledgment notice.
    pub fn submit(&mut self) -> Option<Submission> {
        self.notice = None;
        match self.mode {
            AuthMode::Login => self.submit_login(),
            AuthMode::Signup => self.submit_signup(),
        }
    }

    fn submit_login(&mut self) -> Option<Submission> {
        if self.login.email.is_empty() || self.login.password.is_empty() {
            self.error = Some(FormError::MissingFields);
            return None;
        }
        self.error = None;
        Some(Submission::Login(LoginRequest {
            email: self.login.email.clone(),
            password: self.login.password.clone(),
        }))
    }

    fn submit_signup(&mut self) -> Option<Submission> {
        if !self.signup.all_filled() {
            self.error = Some(FormError::MissingFields);
            return None;
        }
        if self.signup.password != self.signup.confirm_password {
            self.error = Some(FormError::PasswordMismatch);
            return None;
        }
        self.error = None;
        self.notice = Some(SIGNUP_SUCCESS_NOTICE);
        let fields = std::mem::take(&mut self.signup);
        Some(Submission::Signup(SignupRequest {
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            password: fields.password,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_signup() -> AuthForm {
        let mut form = AuthForm::new();
        form.set_mode(AuthMode::Signup);
        form.set_signup_field(SignupField::FirstName, String::from("Ama"));
        form.set_signup_field(SignupField::LastName, String::from("Koffi"));
        form.set_signup_field(SignupField::Email, String::from("ama@example.ci"));
        form.set_signup_field(SignupField::Password, String::from("secret"));
        form.set_signup_field(SignupField::ConfirmPassword, String::from("secret"));
        form
    }

    #[test]
    fn login_with_empty_field_sets_required_message() {
        let mut form = AuthForm::new();
        form.set_login_field(LoginField::Email, String::from("ama@example.ci"));
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), Some(FormError::MissingFields));
        assert_eq!(
            form.error().map(|e| e.to_string()),
            Some(String::from("Tous les champs sont obligatoires."))
        );
        // Fields survive the failed submit for correction.
        assert_eq!(form.login().email, "ama@example.ci");
    }

    #[test]
    fn login_with_both_fields_produces_submission() {
        let mut form = AuthForm::new();
        form.set_login_field(LoginField::Email, String::from("ama@example.ci"));
        form.set_login_field(LoginField::Password, String::from("secret"));
        let submission = form.submit();
        assert_eq!(
            submission,
            Some(Submission::Login(LoginRequest {
                email: String::from("ama@example.ci"),
                password: String::from("secret"),
            }))
        );
        assert_eq!(form.error(), None);
        // Login does not clear its fields; navigation follows anyway.
        assert_eq!(form.login().password, "secret");
    }

    #[test]
    fn signup_password_mismatch_keeps_fields() {
        let mut form = filled_signup();
        form.set_signup_field(SignupField::ConfirmPassword, String::from("autre"));
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), Some(FormError::PasswordMismatch));
        assert_eq!(
            form.error().map(|e| e.to_string()),
            Some(String::from("Les mots de passe ne correspondent pas."))
        );
        assert_eq!(form.signup().first_name, "Ama");
        assert_eq!(form.signup().confirm_password, "autre");
    }

    #[test]
    fn signup_missing_field_sets_required_message() {
        let mut form = filled_signup();
        form.set_signup_field(SignupField::LastName, String::new());
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), Some(FormError::MissingFields));
    }

    #[test]
    fn valid_signup_resets_fields_and_acknowledges() {
        let mut form = filled_signup();
        let submission = form.submit();
        assert_eq!(
            submission,
            Some(Submission::Signup(SignupRequest {
                first_name: String::from("Ama"),
                last_name: String::from("Koffi"),
                email: String::from("ama@example.ci"),
                password: String::from("secret"),
            }))
        );
        assert_eq!(form.error(), None);
        assert_eq!(form.notice(), Some(SIGNUP_SUCCESS_NOTICE));
        assert_eq!(*form.signup(), SignupFields::default());
    }

    #[test]
    fn mode_toggle_preserves_fields_and_clears_error() {
        let mut form = AuthForm::new();
        form.set_mode(AuthMode::Signup);
        form.set_signup_field(SignupField::FirstName, String::from("Ama"));
        assert_eq!(form.submit(), None);
        assert!(form.error().is_some());

        form.set_mode(AuthMode::Login);
        assert_eq!(form.error(), None);
        form.set_mode(AuthMode::Signup);
        assert_eq!(form.signup().first_name, "Ama");
    }

    #[test]
    fn defaults_to_login_mode() {
        assert_eq!(AuthForm::new().mode(), AuthMode::Login);
    }

    #[test]
    fn submission_payload_serializes_for_the_collaborator() {
        let request = LoginRequest {
            email: String::from("ama@example.ci"),
            password: String::from("secret"),
        };
        let payload = serde_json::to_value(&request).expect("payload serializes");
        assert_eq!(
            payload,
            serde_json::json!({ "email": "ama@example.ci", "password": "secret" })
        );
    }
}
