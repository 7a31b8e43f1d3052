use std::str::FromStr;

/// Value of environment variable `key`, or `default` when it is unset or
/// rejected by `validator`.
pub fn env_or(key: &str, default: &str, validator: Option<&dyn Fn(&str) -> bool>) -> String {
    match std::env::var(key) {
        Ok(value) => match validator {
            Some(valid) if !valid(&value) => {
                tracing::warn!(%key, %value, %default, "ignoring invalid environment value");
                default.to_string()
            }
            _ => value,
        },
        Err(_) => default.to_string(),
    }
}

/// Parses environment variable `key` as `T`, keeping `default` when it is
/// unset or does not parse.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + ToString,
{
    let fallback = default.to_string();
    let parses = |v: &str| v.parse::<T>().is_ok();
    env_or(key, &fallback, Some(&parses))
        .parse()
        .unwrap_or(default)
}
