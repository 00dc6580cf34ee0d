mod change_password;
mod field;
mod password_policy;
mod session_token;
mod user;

pub use change_password::{ChangePasswordForm, PasswordChangeResponse};
pub use field::{Field, FieldErrors};
pub use password_policy::{is_compliant, validate, ValidationMessages};
pub use session_token::SessionToken;
pub use user::{CompanyProfile, CurrentUser, Role};
