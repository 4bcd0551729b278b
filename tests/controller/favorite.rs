//! Tests for the favorite endpoints: list, add, delete, and composite lookup.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::favorite::{
        add_user_favorite, delete_favorite, find_favorite, get_favorites, get_user_favorites,
    },
    model::{
        auth::CurrentUser,
        favorite::{FavoriteQueryDto, NewFavoriteDto},
    },
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

/// Expect an added favorite to appear in the user's list
#[tokio::test]
async fn added_favorite_appears_in_list() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let user = test.user().insert_default_user().await?;

    let result = add_user_favorite(
        State(test.state()),
        CurrentUser(user.id),
        Path(user.id),
        Json(NewFavoriteDto {
            favorite_id: 1,
            favorite_name: "Tatooine".to_string(),
            favorite_type: Some("p".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_user_favorites(State(test.state()), CurrentUser(user.id), Path(user.id)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["favorite_name"], "Tatooine");

    Ok(())
}

/// Expect the global listing to include favorites from every user
#[tokio::test]
async fn global_listing_spans_users() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let luke = test.user().insert_user("luke@rebellion.org", "nerfherder").await?;
    let leia = test.user().insert_user("leia@rebellion.org", "alderaan").await?;
    test.user().insert_favorite(luke.id, 1, "Tatooine", "p").await?;
    test.user().insert_favorite(leia.id, 2, "Alderaan", "p").await?;

    let result = get_favorites(State(test.state()), CurrentUser(luke.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 2);
    assert!(favorites[0].get("user_id").is_none());

    Ok(())
}

/// Expect 404 when listing favorites for a user that does not exist
#[tokio::test]
async fn list_fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let result = get_user_favorites(State(test.state()), CurrentUser(1), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "User not found");

    Ok(())
}

/// Expect a deleted favorite to disappear from the list, and a repeated
/// delete to return 404
#[tokio::test]
async fn delete_removes_favorite_and_repeat_delete_fails() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let user = test.user().insert_default_user().await?;
    let favorite = test.user().insert_favorite(user.id, 1, "Tatooine", "p").await?;

    let result = delete_favorite(State(test.state()), CurrentUser(user.id), Path(favorite.id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_user_favorites(State(test.state()), CurrentUser(user.id), Path(user.id)).await;
    let body = body_json(result.unwrap().into_response()).await;
    assert!(body.as_array().unwrap().is_empty());

    let repeat = delete_favorite(State(test.state()), CurrentUser(user.id), Path(favorite.id)).await;

    assert!(repeat.is_err());
    assert_eq!(
        repeat.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect the composite lookup to return the matching favorite
#[tokio::test]
async fn lookup_returns_matching_favorite() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let user = test.user().insert_default_user().await?;
    let favorite = test.user().insert_favorite(user.id, 4, "A New Hope", "f").await?;

    let result = find_favorite(
        State(test.state()),
        CurrentUser(user.id),
        Json(FavoriteQueryDto {
            favorite_id: 4,
            favorite_name: "A New Hope".to_string(),
            favorite_type: Some("f".to_string()),
            user_id: user.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["id"], favorite.id);

    Ok(())
}

/// Expect 401 when the composite lookup matches nothing
#[tokio::test]
async fn lookup_fails_without_match() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let user = test.user().insert_default_user().await?;

    let result = find_favorite(
        State(test.state()),
        CurrentUser(user.id),
        Json(FavoriteQueryDto {
            favorite_id: 4,
            favorite_name: "A New Hope".to_string(),
            favorite_type: Some("f".to_string()),
            user_id: user.id,
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}
