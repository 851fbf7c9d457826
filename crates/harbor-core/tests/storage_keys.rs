use harbor_core::error::CoreError;
use harbor_core::storage_keys;

#[test]
fn avatar_path_is_user_folder_plus_extension() {
    assert_eq!(storage_keys::avatar("u1", "png"), "u1/avatar.png");
}

#[test]
fn variants_cover_every_recognized_extension() {
    assert_eq!(
        storage_keys::avatar_variants("u1"),
        vec![
            "u1/avatar.jpg",
            "u1/avatar.jpeg",
            "u1/avatar.png",
            "u1/avatar.webp",
        ]
    );
}

#[test]
fn user_file_joins_prefix_and_name() {
    assert_eq!(storage_keys::user_file("u1", "old.gif"), "u1/old.gif");
    assert_eq!(storage_keys::user_prefix("u1"), "u1");
}

#[test]
fn user_ids_that_escape_their_folder_are_rejected() {
    assert!(storage_keys::check_user_id("3f6c1b2e-user").is_ok());
    assert!(matches!(
        storage_keys::check_user_id(""),
        Err(CoreError::EmptyUserId)
    ));
    assert!(matches!(
        storage_keys::check_user_id("a/b"),
        Err(CoreError::InvalidUserId(_))
    ));
    assert!(matches!(
        storage_keys::check_user_id(".."),
        Err(CoreError::InvalidUserId(_))
    ));
}
