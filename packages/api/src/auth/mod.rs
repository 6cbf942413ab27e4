//! Authentication: password hashing, accounts, session state and the route guard.

mod account;
mod guard;
mod password;
mod session;

pub use account::{authenticate, register};
pub use guard::CurrentUser;
pub use password::{hash_password, verify_password, PasswordError};
pub use session::{
    flash, log_in, log_out, session_user_id, take_flashes, Flash, SESSION_FLASH_KEY,
    SESSION_USER_ID_KEY,
};
