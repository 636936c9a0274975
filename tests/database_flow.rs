mod common;

use common::{TestContext, MISSING_ID};
use superheroes::db::power::MAX_DESCRIPTION_LEN;
use superheroes::db::seed::{HEROES, HERO_POWERS, POWERS};
use superheroes::types::{error::AppError, hero_power::RHeroPowerCreate};

#[actix_web::test]
async fn test_seed_loads_fixture() {
    let ctx = TestContext::new().await;

    let summary = ctx.db.seed().await.expect("seed failed");
    assert_eq!(summary.heroes, 6);
    assert_eq!(summary.powers, 4);
    assert_eq!(summary.hero_powers, 7);

    assert_eq!(ctx.db.list_heroes().await.unwrap().len(), HEROES.len());
    assert_eq!(ctx.db.list_powers().await.unwrap().len(), POWERS.len());
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), HERO_POWERS.len() as u64);
}

#[actix_web::test]
async fn test_reseed_resets_state() {
    let ctx = TestContext::seeded().await;
    let hero = ctx.hero_id("Gwen Stacy").await;
    let power = ctx.power_id("flight").await;

    ctx.db.create_hero_power(RHeroPowerCreate {
        strength: "Weak".to_string(),
        power_id: power,
        hero_id: hero,
    }).await.expect("create failed");
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), 8);

    ctx.db.seed().await.expect("reseed failed");
    assert_eq!(ctx.db.list_heroes().await.unwrap().len(), 6);
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), 7);
}

#[actix_web::test]
async fn test_delete_hero_cascades_to_hero_powers() {
    let ctx = TestContext::seeded().await;
    let kamala = ctx.hero_id("Kamala Khan").await;
    assert_eq!(ctx.db.get_hero_detail(kamala).await.unwrap().hero_powers.len(), 2);

    ctx.db.delete_hero(kamala).await.expect("delete failed");

    assert!(matches!(ctx.db.get_hero(kamala).await, Err(AppError::NotFound("Hero not found"))));
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), 5);
    // the powers themselves survive
    assert_eq!(ctx.db.list_powers().await.unwrap().len(), 4);
}

#[actix_web::test]
async fn test_delete_power_cascades_to_hero_powers() {
    let ctx = TestContext::seeded().await;
    let super_strength = ctx.power_id("super strength").await;
    let doreen = ctx.hero_id("Doreen Green").await;

    ctx.db.delete_power(super_strength).await.expect("delete failed");

    assert!(matches!(
        ctx.db.get_power(super_strength).await,
        Err(AppError::NotFound("Power not found"))
    ));
    // three heroes held super strength
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), 4);
    assert!(ctx.db.get_hero_detail(doreen).await.unwrap().hero_powers.is_empty());
    assert_eq!(ctx.db.list_heroes().await.unwrap().len(), 6);
}

#[actix_web::test]
async fn test_delete_missing_rows() {
    let ctx = TestContext::seeded().await;

    assert!(matches!(ctx.db.delete_hero(MISSING_ID).await, Err(AppError::NotFound(_))));
    assert!(matches!(ctx.db.delete_power(MISSING_ID).await, Err(AppError::NotFound(_))));
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), 7);
}

#[actix_web::test]
async fn test_update_power_description_direct() {
    let ctx = TestContext::seeded().await;
    let elasticity = ctx.power_id("elasticity").await;

    let updated = ctx.db
        .update_power_description(elasticity, Some("bends like rubber".to_string()))
        .await
        .expect("update failed");
    assert_eq!(updated.description, "bends like rubber");
    assert_eq!(updated.name, "elasticity");

    let rejected = ctx.db.update_power_description(elasticity, None).await;
    assert!(matches!(rejected, Err(AppError::Validation(_))));
    assert_eq!(ctx.db.get_power(elasticity).await.unwrap().description, "bends like rubber");

    let too_long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
    let rejected = ctx.db.update_power_description(elasticity, Some(too_long)).await;
    assert!(matches!(rejected, Err(AppError::Validation(_))));
    assert_eq!(ctx.db.get_power(elasticity).await.unwrap().description, "bends like rubber");

    let missing = ctx.db.update_power_description(MISSING_ID, Some("x".to_string())).await;
    assert!(matches!(missing, Err(AppError::NotFound("Power not found"))));
}

#[actix_web::test]
async fn test_create_hero_power_rejections_leave_no_rows() {
    let ctx = TestContext::seeded().await;
    let hero = ctx.hero_id("Carol Danvers").await;
    let power = ctx.power_id("elasticity").await;

    let cases = [
        RHeroPowerCreate { strength: "Mighty".to_string(), power_id: power, hero_id: hero },
        RHeroPowerCreate { strength: "Strong".to_string(), power_id: power, hero_id: MISSING_ID },
        RHeroPowerCreate { strength: "Strong".to_string(), power_id: MISSING_ID, hero_id: hero },
    ];
    for payload in cases {
        let res = ctx.db.create_hero_power(payload).await;
        assert!(matches!(res, Err(AppError::Validation(_))));
    }
    assert_eq!(ctx.db.count_hero_powers().await.unwrap(), 7);
}
