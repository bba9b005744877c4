use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[test]
fn demo_pair_authenticates() {
    let auth = FixedCredentialAuthenticator::demo();
    assert_eq!(auth.authenticate(&creds("jane@edunova.com", "password123")), Ok(()));
}

#[test]
fn wrong_password_is_invalid_credentials() {
    let auth = FixedCredentialAuthenticator::demo();
    assert_eq!(
        auth.authenticate(&creds("jane@edunova.com", "hunter2")),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn wrong_email_is_invalid_credentials() {
    let auth = FixedCredentialAuthenticator::demo();
    assert_eq!(
        auth.authenticate(&creds("john@edunova.com", "password123")),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn empty_pair_is_invalid_credentials() {
    let auth = FixedCredentialAuthenticator::demo();
    assert_eq!(auth.authenticate(&creds("", "")), Err(AuthError::InvalidCredentials));
}

#[test]
fn email_comparison_is_case_sensitive() {
    let auth = FixedCredentialAuthenticator::demo();
    assert_eq!(
        auth.authenticate(&creds("Jane@EduNova.com", "password123")),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn auth_error_messages_render() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "incorrect credentials");
    assert_eq!(
        AuthError::Backend("timeout".to_owned()).to_string(),
        "authentication failed: timeout"
    );
}
