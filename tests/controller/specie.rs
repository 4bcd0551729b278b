//! Tests for the specie listing and lookup endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::specie::{get_specie, get_species},
    model::auth::CurrentUser,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

/// Expect every specie to be listed
#[tokio::test]
async fn get_species_lists_all() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    test.galaxy().insert_specie("Human", None).await?;
    test.galaxy().insert_specie("Wookiee", None).await?;

    let result = get_species(State(test.state()), CurrentUser(1)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect a specie to be retrieved with its linked characters abbreviated
#[tokio::test]
async fn get_specie_includes_linked_characters() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let wookiee = test.galaxy().insert_specie("Wookiee", None).await?;
    let chewbacca = test.galaxy().insert_character("Chewbacca", None).await?;
    test.galaxy()
        .link_character_specie(chewbacca.id, wookiee.id)
        .await?;

    let result = get_specie(State(test.state()), CurrentUser(1), Path(wookiee.id)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["name"], "Wookiee");
    assert_eq!(body["characters"][0]["name"], "Chewbacca");
    assert!(body["characters"][0].get("gender").is_none());

    Ok(())
}

/// Expect 404 with a "Specie not found" message for an unknown id
#[tokio::test]
async fn get_specie_fails_for_unknown_id() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let result = get_specie(State(test.state()), CurrentUser(1), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Specie not found");

    Ok(())
}
