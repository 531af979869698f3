use thiserror::Error;

/// Ошибки формы смены пароля. Проверки локальные, ввод при ошибке
/// сохраняется для исправления.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordChangeError {
    #[error("Текущий пароль должен содержать не менее 6 символов")]
    CurrentTooShort,
    #[error("Новый пароль должен содержать не менее 8 символов")]
    NewTooShort,
    #[error("Пароли не совпадают")]
    ConfirmationMismatch,
}

/// Проверяет форму смены пароля, возвращает первую нарушенную проверку.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordChangeError> {
    if current.len() < 6 {
        return Err(PasswordChangeError::CurrentTooShort);
    }
    if new.len() < 8 {
        return Err(PasswordChangeError::NewTooShort);
    }
    if new != confirm {
        return Err(PasswordChangeError::ConfirmationMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_current_password() {
        assert_eq!(
            validate_password_change("12345", "long-enough-pw", "long-enough-pw"),
            Err(PasswordChangeError::CurrentTooShort)
        );
    }

    #[test]
    fn rejects_short_new_password() {
        assert_eq!(
            validate_password_change("123456", "short", "short"),
            Err(PasswordChangeError::NewTooShort)
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert_eq!(
            validate_password_change("123456", "long-enough-pw", "different-pw"),
            Err(PasswordChangeError::ConfirmationMismatch)
        );
    }

    #[test]
    fn accepts_valid_form() {
        assert!(validate_password_change("123456", "long-enough-pw", "long-enough-pw").is_ok());
    }
}
