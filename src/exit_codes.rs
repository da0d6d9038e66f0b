//! Exit code constants for the gitsweep CLI.
//!
//! - 0: Success (an empty sweep is a success)
//! - 1: User error (bad configuration, malformed age expression)
//! - 2: Repository could not be opened
//! - 3: Authentication exhausted during fetch or push
//! - 4: Git operation failure (ref resolution, network, rejected push)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing path, invalid settings, or a malformed age expression.
pub const USER_ERROR: i32 = 1;

/// The repository path does not hold an openable git repository.
pub const REPOSITORY_NOT_FOUND: i32 = 2;

/// Every credential was offered once and the remote still refused.
pub const AUTH_FAILURE: i32 = 3;

/// Git operation failure: unreadable refs, transport errors, rejected deletions.
pub const GIT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            REPOSITORY_NOT_FOUND,
            AUTH_FAILURE,
            GIT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
