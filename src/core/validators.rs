use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() < min {
            Err(format!("Minimum length is {}", min))
        } else {
            Ok(())
        }
    })
}

pub fn max_length(max: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() > max {
            Err(format!("Maximum length is {}", max))
        } else {
            Ok(())
        }
    })
}

/// Compile `pattern` into a regex validator. Schema files carry patterns as
/// plain strings, so a bad one is reported instead of panicking.
pub fn pattern(pattern: &str) -> Result<Validator, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(format!("Value must match pattern: {}", re.as_str()))
        }
    }))
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = message.into();
    Box::new(move |value: &str| {
        if f(value) { Ok(()) } else { Err(msg.clone()) }
    })
}
