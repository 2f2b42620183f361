/// Decides whether a username/password pair may open the session.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed credential pair compared in plaintext.
///
/// This is a placeholder gate, not an authentication boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_pair_is_accepted() {
        let creds = StaticCredentials::new("user", "pass");
        assert!(creds.verify("user", "pass"));
        assert!(!creds.verify("user", "Pass"));
        assert!(!creds.verify("user ", "pass"));
        assert!(!creds.verify("", ""));
    }
}
