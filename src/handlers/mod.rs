pub mod check_user;
pub mod verify_otp;
