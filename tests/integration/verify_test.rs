use guildpass::error::LinkServiceError;
use guildpass::usecase::verify::{VerifyOtpInput, VerifyOtpUseCase};

use crate::helpers::{MockUserRepo, linked_record, unlinked_record};

fn input(email: &str, otp: &str, discord_id: &str) -> VerifyOtpInput {
    VerifyOtpInput {
        email: email.to_owned(),
        otp: otp.to_owned(),
        discord_id: discord_id.to_owned(),
    }
}

#[tokio::test]
async fn should_link_discord_id_and_clear_otp_on_correct_code() {
    let repo = MockUserRepo::new(vec![unlinked_record("a@x.com", Some("123456"))]);
    let records = repo.records_handle();

    let uc = VerifyOtpUseCase { repo };
    uc.execute(input("a@x.com", "123456", "123")).await.unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records[0].discord_id.as_deref(), Some("123"));
    assert!(records[0].otp.is_none(), "otp must be cleared on success");
}

#[tokio::test]
async fn should_burn_code_on_wrong_attempt_so_retry_fails() {
    let repo = MockUserRepo::new(vec![unlinked_record("a@x.com", Some("123456"))]);
    let records = repo.records_handle();

    let uc = VerifyOtpUseCase { repo };

    // Wrong code: fails and clears the stored one.
    let result = uc.execute(input("a@x.com", "123457", "123")).await;
    assert!(matches!(result, Err(LinkServiceError::InvalidOtp)));
    {
        let records = records.lock().unwrap();
        assert!(records[0].otp.is_none(), "failed attempt must clear otp");
        assert!(records[0].discord_id.is_none());
    }

    // Correct code now fails too: it was single-use.
    let result = uc.execute(input("a@x.com", "123456", "123")).await;
    assert!(
        matches!(result, Err(LinkServiceError::InvalidOtp)),
        "expected InvalidOtp, got {result:?}"
    );
}

#[tokio::test]
async fn should_fail_when_no_code_is_outstanding() {
    let repo = MockUserRepo::new(vec![unlinked_record("a@x.com", None)]);
    let records = repo.records_handle();

    let uc = VerifyOtpUseCase { repo };
    let result = uc.execute(input("a@x.com", "123456", "123")).await;

    assert!(matches!(result, Err(LinkServiceError::InvalidOtp)));
    let records = records.lock().unwrap();
    assert!(
        records[0].discord_id.is_none(),
        "discord_id must stay unset without a valid code"
    );
}

#[tokio::test]
async fn should_return_not_found_for_unknown_email() {
    let uc = VerifyOtpUseCase {
        repo: MockUserRepo::empty(),
    };
    let result = uc.execute(input("nobody@x.com", "123456", "123")).await;

    assert!(
        matches!(result, Err(LinkServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_verification_when_already_linked() {
    let repo = MockUserRepo::new(vec![linked_record("a@x.com", "123")]);
    let records = repo.records_handle();

    let uc = VerifyOtpUseCase { repo };
    let result = uc.execute(input("a@x.com", "123456", "456")).await;

    assert!(
        matches!(result, Err(LinkServiceError::AlreadyLinked)),
        "expected AlreadyLinked, got {result:?}"
    );
    let records = records.lock().unwrap();
    assert_eq!(
        records[0].discord_id.as_deref(),
        Some("123"),
        "linked id must never be reassigned"
    );
}

#[tokio::test]
async fn should_reject_missing_fields() {
    let uc = VerifyOtpUseCase {
        repo: MockUserRepo::new(vec![unlinked_record("a@x.com", Some("123456"))]),
    };

    let result = uc.execute(input("a@x.com", "", "123")).await;
    assert!(matches!(result, Err(LinkServiceError::MissingData)));

    let result = uc.execute(input("a@x.com", "123456", "")).await;
    assert!(matches!(result, Err(LinkServiceError::MissingData)));
}
