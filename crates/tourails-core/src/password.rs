//! Password-strength heuristic for the signup form.
//!
//! Four independent checks, one point each: at least eight characters, an
//! ASCII uppercase letter, an ASCII digit, and anything that is not an ASCII
//! letter or digit. The score only drives the meter; it never blocks
//! submission.

/// Minimum length that earns the length point
pub const MIN_LENGTH: usize = 8;

/// Meter reading derived from the 0-4 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    TooWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        Self::from_score(score(password))
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            0 => PasswordStrength::TooWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            PasswordStrength::TooWeak => 0,
            PasswordStrength::Weak => 1,
            PasswordStrength::Fair => 2,
            PasswordStrength::Good => 3,
            PasswordStrength::Strong => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::TooWeak => "Too weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// CSS class for the filled meter segments
    pub fn color_class(&self) -> &'static str {
        match self {
            PasswordStrength::TooWeak => "strength-none",
            PasswordStrength::Weak => "strength-weak",
            PasswordStrength::Fair => "strength-fair",
            PasswordStrength::Good => "strength-good",
            PasswordStrength::Strong => "strength-strong",
        }
    }
}

/// Count satisfied checks, 0 through 4.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|ok| **ok).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_marks() {
        assert_eq!(score("Password1!"), 4);
        assert_eq!(PasswordStrength::of("Password1!"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::of("Password1!").label(), "Strong");
    }

    #[test]
    fn nothing_satisfied() {
        assert_eq!(score("abc"), 0);
        assert_eq!(PasswordStrength::of("abc").label(), "Too weak");
        assert_eq!(score(""), 0);
    }

    #[test]
    fn each_check_counts_once() {
        assert_eq!(score("abcdefgh"), 1);
        assert_eq!(score("A"), 1);
        assert_eq!(score("12"), 1);
        assert_eq!(score("#"), 1);
        assert_eq!(score("ABCDEFGH"), 2);
        assert_eq!(score("Abcdefg1"), 3);
    }

    #[test]
    fn non_ascii_counts_as_symbol_not_uppercase() {
        // 'É' is not in A-Z
        assert_eq!(score("É"), 1);
        assert_eq!(score("pass word"), 2);
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(score("éééééééé"), 2);
    }

    #[test]
    fn labels_and_classes_line_up() {
        for s in 0..=4u8 {
            let strength = PasswordStrength::from_score(s);
            assert_eq!(strength.score(), s);
        }
        assert_eq!(PasswordStrength::Good.color_class(), "strength-good");
    }
}
