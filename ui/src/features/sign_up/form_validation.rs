use super::types::{FormErrors, RegistrationRequest};

pub const RESTAURANT_NAME_REQUIRED: &str = "Informe o nome do estabelecimento.";
pub const MANAGER_NAME_REQUIRED: &str = "Informe seu nome.";
pub const EMAIL_REQUIRED: &str = "Informe seu e-mail.";
pub const EMAIL_INVALID: &str = "Informe um e-mail válido.";
pub const PHONE_REQUIRED: &str = "Informe seu celular.";

/// Validates a registration request before it is sent.
///
/// Values are checked as typed; nothing is trimmed or rewritten.
pub fn validate_registration(request: &RegistrationRequest) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    if request.restaurant_name.trim().is_empty() {
        errors.restaurant_name = Some(RESTAURANT_NAME_REQUIRED.to_string());
    }

    if request.manager_name.trim().is_empty() {
        errors.manager_name = Some(MANAGER_NAME_REQUIRED.to_string());
    }

    if request.email.trim().is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(&request.email) {
        errors.email = Some(EMAIL_INVALID.to_string());
    }

    if request.phone.trim().is_empty() {
        errors.phone = Some(PHONE_REQUIRED.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Syntactic email check: one `@`, a dotted local part and a dotted domain
/// ending in an alphabetic top-level label.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    is_valid_local_part(local) && is_valid_domain(domain)
}

// `&` cannot round-trip through the sign-in query string
fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && !local.contains('&')
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .map(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);

    labels_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            restaurant_name: "Pizza Place".to_string(),
            manager_name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            phone: "11999999999".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(validate_registration(&request()), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_reported_individually() {
        let mut req = request();
        req.restaurant_name = "   ".to_string();
        req.phone = String::new();

        let errors = validate_registration(&req).unwrap_err();
        assert_eq!(errors.restaurant_name.as_deref(), Some(RESTAURANT_NAME_REQUIRED));
        assert_eq!(errors.phone.as_deref(), Some(PHONE_REQUIRED));
        assert_eq!(errors.manager_name, None);
        assert_eq!(errors.email, None);
    }

    #[test]
    fn test_empty_and_malformed_email_have_distinct_messages() {
        let mut req = request();
        req.email = String::new();
        assert_eq!(
            validate_registration(&req).unwrap_err().email.as_deref(),
            Some(EMAIL_REQUIRED)
        );

        req.email = "ana.test.com".to_string();
        assert_eq!(
            validate_registration(&req).unwrap_err().email.as_deref(),
            Some(EMAIL_INVALID)
        );
    }

    #[test]
    fn test_email_syntax() {
        for valid in [
            "ana@test.com",
            "ana.souza+pizza@mail.example.com.br",
            "a@b-c.io",
        ] {
            assert!(is_valid_email(valid), "{valid} should be valid");
        }

        for invalid in [
            "ana",
            "@test.com",
            "ana@",
            "ana@test",
            "ana@@test.com",
            "ana@te st.com",
            "ana@test.c",
            "ana@test.123",
            ".ana@test.com",
            "ana..souza@test.com",
            "ana@-test.com",
            "ana@test..com",
            "ana@test.com ",
            "ana&bia@test.com",
        ] {
            assert!(!is_valid_email(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn test_ampersand_in_email_is_rejected_before_submission() {
        let mut req = request();
        req.email = "a&b@test.com".to_string();

        let errors = validate_registration(&req).unwrap_err();
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
    }
}
