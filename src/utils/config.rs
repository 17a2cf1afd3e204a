/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, treating an unset or blank value as missing
fn read_non_empty(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Gets an environment variable or returns a default value if it is missing,
/// blank or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is missing, blank or invalid
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_non_empty(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if missing, blank or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_non_empty(env_var).and_then(|val| val.parse::<T>().ok())
}
