use guildpass::error::LinkServiceError;
use guildpass::usecase::grant::GrantRoleUseCase;

use crate::helpers::{MockRoleGranter, MockUserRepo, linked_record};

#[tokio::test]
async fn should_grant_role_to_linked_member() {
    let granter = MockRoleGranter::new();
    let granted = granter.granted_handle();

    let uc = GrantRoleUseCase {
        repo: MockUserRepo::new(vec![linked_record("a@x.com", "123")]),
        granter,
    };
    let requested = uc.execute("123").await.unwrap();

    assert!(requested);
    assert_eq!(*granted.lock().unwrap(), vec!["123".to_owned()]);
}

#[tokio::test]
async fn should_ignore_member_without_linked_record() {
    let granter = MockRoleGranter::new();
    let granted = granter.granted_handle();

    let uc = GrantRoleUseCase {
        repo: MockUserRepo::empty(),
        granter,
    };
    let requested = uc.execute("999").await.unwrap();

    assert!(!requested);
    assert!(
        granted.lock().unwrap().is_empty(),
        "granter must not be called for unknown ids"
    );
}

#[tokio::test]
async fn should_surface_granter_failure() {
    let uc = GrantRoleUseCase {
        repo: MockUserRepo::new(vec![linked_record("a@x.com", "123")]),
        granter: MockRoleGranter::failing(),
    };
    let result = uc.execute("123").await;

    assert!(
        matches!(result, Err(LinkServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
