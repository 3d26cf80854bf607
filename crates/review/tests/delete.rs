use replykit_review::ApprovalStatus;
use replykit_shared::{Error, Identity};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_delete_reply() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (product_id, review_id) = helpers::create_product_review(&state.pool).await?;
    let reply_id = helpers::create_comment(
        &state.pool,
        product_id,
        review_id,
        ApprovalStatus::Approved,
        "2024-03-02 08:00:00",
    )
    .await?;

    let deleted = state.service.delete(&helpers::moderator(), reply_id).await?;
    assert_eq!(deleted, reply_id);
    assert!(state.service.list(review_id).await?.is_empty());

    let err = state
        .service
        .delete(&helpers::moderator(), reply_id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ReplyNotFound(id) if id == reply_id));

    Ok(())
}

#[tokio::test]
async fn test_delete_refuses_review() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (_, review_id) = helpers::create_product_review(&state.pool).await?;

    let err = state
        .service
        .delete(&helpers::moderator(), review_id)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotAReply));
    assert_eq!(err.code(), "invalid_reply");
    assert_eq!(helpers::count_comments(&state.pool).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_delete_reparents_nested_replies() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (product_id, review_id) = helpers::create_product_review(&state.pool).await?;
    let reply_id = helpers::create_comment(
        &state.pool,
        product_id,
        review_id,
        ApprovalStatus::Approved,
        "2024-03-02 08:00:00",
    )
    .await?;
    let nested_id = helpers::create_comment(
        &state.pool,
        product_id,
        reply_id,
        ApprovalStatus::Approved,
        "2024-03-03 08:00:00",
    )
    .await?;

    state.service.delete(&helpers::moderator(), reply_id).await?;

    assert_eq!(helpers::parent_of(&state.pool, reply_id).await?, None);
    assert_eq!(
        helpers::parent_of(&state.pool, nested_id).await?,
        Some(review_id as i64)
    );

    let replies = state.service.list(review_id).await?;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id, nested_id);

    Ok(())
}

#[tokio::test]
async fn test_delete_requires_capability() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let (product_id, review_id) = helpers::create_product_review(&state.pool).await?;
    let reply_id = helpers::create_comment(
        &state.pool,
        product_id,
        review_id,
        ApprovalStatus::Approved,
        "2024-03-02 08:00:00",
    )
    .await?;

    let err = state
        .service
        .delete(&helpers::customer(), reply_id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden));

    let err = state
        .service
        .delete(&Identity::anonymous(), reply_id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unauthorized));

    assert_eq!(helpers::count_comments(&state.pool).await?, 2);

    Ok(())
}
