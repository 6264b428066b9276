use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2 with a random salt.
///
/// Fails only on internal error (entropy or parameter failure); such a
/// failure is fatal to the calling request and is never retried.
pub fn hash(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored hash.
///
/// A mismatch is a normal `false` result, not an error. An error means the
/// stored hash itself could not be parsed.
pub fn verify(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| format!("Failed to parse hash: {}", e))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "TestPassword123!";
        let hashed = hash(password).unwrap();

        assert!(verify(password, &hashed).unwrap());
        assert!(!verify("WrongPassword", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = hash("pw1").unwrap();
        let b = hash("pw1").unwrap();
        assert_ne!(a, b);
        assert!(verify("pw1", &a).unwrap());
        assert!(verify("pw1", &b).unwrap());
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error_not_a_mismatch() {
        assert!(verify("pw1", "not-a-phc-string").is_err());
    }
}
