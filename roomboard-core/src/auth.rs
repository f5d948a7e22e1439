//! Placeholder admin gate.
//!
//! Hard-coded credentials with no lockout or rate limiting. This stands in
//! for an authentication backend that does not exist; it only gates access
//! to the admin views.

use crate::error::{RoomBoardError, RoomBoardResult};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

/// Check the hard-coded admin credentials.
///
/// Failures report a generic invalid-credentials error; callers must not
/// reveal which of the two fields was wrong.
pub fn verify_credentials(username: &str, password: &str) -> RoomBoardResult<()> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(RoomBoardError::InvalidCredentials)
    }
}
