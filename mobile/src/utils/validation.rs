/// Validation utilities for user input
///
/// Screens validate locally before calling the backend, so obvious mistakes
/// get an immediate message instead of a round trip.

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Invalid email format");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate password for registration
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    ValidationResult::ok()
}

/// Validate a glucose input as typed on the tracking screen
///
/// Accepts a positive whole number of mg/dL within a plausible range.
pub fn validate_glucose_input(input: &str) -> ValidationResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Glucose value is required");
    }

    let value: u32 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) => return ValidationResult::err("Invalid glucose value"),
    };

    if value == 0 || value > 1000 {
        return ValidationResult::err("Invalid glucose value");
    }

    ValidationResult::ok()
}

/// Validate a blood-pressure pair as typed on the tracking screen
pub fn validate_pressure_input(systolic: &str, diastolic: &str) -> ValidationResult {
    let systolic: u32 = match systolic.trim().parse() {
        Ok(value) => value,
        Err(_) => return ValidationResult::err("Invalid systolic value"),
    };
    let diastolic: u32 = match diastolic.trim().parse() {
        Ok(value) => value,
        Err(_) => return ValidationResult::err("Invalid diastolic value"),
    };

    if systolic == 0 || systolic > 300 {
        return ValidationResult::err("Invalid systolic value");
    }

    if diastolic == 0 || diastolic > 200 {
        return ValidationResult::err("Invalid diastolic value");
    }

    if systolic <= diastolic {
        return ValidationResult::err("Systolic must be greater than diastolic");
    }

    ValidationResult::ok()
}

/// Validate a chat message before sending
pub fn validate_chat_message(message: &str) -> ValidationResult {
    if message.trim().is_empty() {
        return ValidationResult::err("Message cannot be empty");
    }

    ValidationResult::ok()
}
